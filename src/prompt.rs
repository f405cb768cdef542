/// Max characters of the video description embedded in the prompt
pub const MAX_DESCRIPTION_LEN: usize = 1500;

/// Max characters of the video title embedded in the prompt
pub const MAX_TITLE_LEN: usize = 200;

/// Remove control characters and hard-truncate.
/// Newlines are kept since descriptions are usually multi-line.
#[must_use]
pub fn sanitize_field(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .take(max_len)
        .collect()
}

/// Builds the promotional-message prompt for a video.
///
/// The link is deliberately left out; the caller appends it after the model
/// answers so it can never be mangled.
#[must_use]
pub fn build_promo_prompt(title: &str, description: Option<&str>) -> String {
    let title = sanitize_field(title, MAX_TITLE_LEN);
    let description = description
        .map(|d| sanitize_field(d, MAX_DESCRIPTION_LEN))
        .unwrap_or_default();

    format!(
        "Como experto en marketing digital y community management, genera un mensaje motivacional \
         para anunciar un nuevo vídeo de YouTube en Discord. El mensaje debe:\n\
         \n\
         1. Ser entusiasta pero profesional\n\
         2. Incluir emojis relevantes (máximo 3)\n\
         3. Destacar el valor principal del vídeo\n\
         4. Terminar con un llamado a la acción\n\
         5. Máximo 2 párrafos cortos\n\
         \n\
         Título del vídeo: \"{title}\"\n\
         Descripción: \"{description}\"\n\
         \n\
         Formato requerido:\n\
         [Emoji relacionado] [Texto motivacional creativo]\n\
         [Llamado a la acción con emoji]\n\
         [Enlace] (el enlace lo añadiremos después)"
    )
}
