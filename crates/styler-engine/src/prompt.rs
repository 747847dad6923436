//! Prompt assembly for both generative calls
//!
//! The composition prompt states identity-preservation constraints before
//! any scene or style direction; that ordering is what keeps the model
//! from restyling the person along with the garment. Style input from the
//! caller is appended last, as supplementary notes.

use styler_types::BackgroundPreset;

/// Build the image-composition prompt
pub(crate) fn composition_prompt(style_directives: &str, background: BackgroundPreset) -> String {
    let style_notes = if style_directives.trim().is_empty() {
        "Ensure a professional, high-end commercial look.".to_string()
    } else {
        format!("Additional Style Notes: {}", style_directives.trim())
    };

    format!(
        "You are an expert at virtual try-on and high-end fashion photography.\n\
         TASK: Replace the clothing on the person in the first image with the clothing \
         from the second image.\n\
         \n\
         STRICT IDENTITY PRESERVATION:\n\
         1. You MUST keep the person's face, hair, skin tone, and body proportions EXACTLY \
         as they appear in the original image.\n\
         2. DO NOT alter the person's identity, age, or facial features.\n\
         3. The only change should be the outfit they are wearing.\n\
         \n\
         VISUAL STYLE: {scene}\n\
         \n\
         TECHNICAL REQUIREMENTS:\n\
         1. Photorealistic result. The new clothing must conform to the person's body pose, \
         contours, and natural drapery.\n\
         2. Seamless blend. Match the lighting and shadows of the scene to the person and \
         the new garment perfectly.\n\
         3. {style_notes}",
        scene = background.scene_directive(),
    )
}

/// Build the advisory prompt for a composed try-on image
pub(crate) fn advisory_prompt(product_label: Option<&str>) -> String {
    let product = product_label
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or("this item");

    format!(
        "You are a Luxury Fashion Retail Consultant. Analyze this virtual try-on for \
         \"{product}\".\n\
         Provide a structured response using exactly these headers:\n\
         \n\
         [MARKET APPEAL]\n\
         Identify the target audience and why they will love this specific look.\n\
         \n\
         [STYLING STRATEGY]\n\
         3 distinct bullet points. Each point MUST start with a bold category label followed \
         by a colon, e.g., \"**Footwear:** ...\", \"**Accessories:** ...\", \
         \"**Grooming/Hair:** ...\".\n\
         \n\
         [CATALOG COPY]\n\
         A professional 2-sentence description for a web store.\n\
         \n\
         [SOCIAL MEDIA HOOK]\n\
         A short, engaging caption for Instagram including relevant hashtags.\n\
         \n\
         Keep it professional, concise, and ready for a merchant to use immediately.",
    )
}
