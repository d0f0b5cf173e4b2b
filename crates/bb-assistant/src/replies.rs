//! Reply generators, one per intent plus the fallback.
//!
//! All are deterministic except [`greeting`] (random pick from
//! [`GREETINGS`]) and [`time`] (formats the timestamp it is given).

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::context::DiagnosisContext;
use crate::knowledge::KnowledgeBase;

pub const GREETINGS: [&str; 3] = [
    "Hello! I am your Betel Leaf AI Assistant. How is your garden today? 🌿",
    "Namaste! Ready to optimize your betel vine health? Ask me anything.",
    "Hey there! I'm specialized in Piper betle care. How can I help you thrive today?",
];

pub const BOT_INFO: &str = "I am **BetelBot**, an advanced AI specifically trained for Betel Leaf cultivation. \
I combine computer vision data with agronomic expertise to help you achieve the best yields.";

pub const CAPABILITIES: &str = "🚀 **I can assist you with:**\n\
1. **Disease Detection:** Upload a photo for an instant diagnosis.\n\
2. **Treatment Plans:** Chemical and Organic remedies for detected issues.\n\
3. **Cultivation Advice:** Soil, water, and fertilizer requirements.\n\
4. **Prevention:** Strategies to stop outbreaks before they start.";

pub const FARMING_GENERAL: &str = "🌱 **General Growth Standards:**\n\
• **Climate:** Tropical and humid (25°C to 35°C is ideal).\n\
• **Soil:** Well-drained fertile clay or loamy soil with pH 7.0–7.5.\n\
• **Sunlight:** Filtered sunlight (Shade nets or 'Bareja' structure required).";

pub const IRRIGATION: &str = "💧 **Watering Protocol:**\n\
• Betel vines need frequent but light watering.\n\
• **Summer:** Daily misting/irrigation.\n\
• **Winter:** Every 3-4 days.\n\
• **Caution:** Never allow water to stand (stagnate) around the roots.";

pub const FERTILIZER: &str = "🧪 **Nutrition Guide:**\n\
• **Organic:** Apply Neem Cake or Mustard Cake slurry every month.\n\
• **Micronutrients:** Zinc and Magnesium sprays help maintain leaf gloss.\n\
• **Avoid:** Excessive Nitrogen (Urea) in the rainy season; it causes rot.";

pub const HARVEST: &str = "✂️ **Harvesting Tips:**\n\
• Leaves are ready when they reach full size and feel leathery.\n\
• Harvest early morning or late evening to maintain freshness.\n\
• Use a sterilized knife or 'Nakh' (thumb-cutter) to avoid pulling the vine.";

pub const PREVENTION: &str = "🛡️ **Prevention Checklist:**\n\
1. Use only disease-free 'cuttings' for planting.\n\
2. Sterilize all pruning tools with alcohol/bleach.\n\
3. Maintain wide spacing for air circulation.\n\
4. Apply Trichoderma to the soil before the monsoon starts.";

pub const THANKS: &str =
    "You're very welcome! I'm here whenever your vines need me. Happy farming! 🌿";

pub const NEEDS_DIAGNOSIS: &str = "📸 **Context Required:** Please upload a photo of the leaf first so I can see what we are treating.";

pub const FALLBACK: &str = "I'm not sure I understand that. 🌿\n\n\
Try asking about:\n\
• 'How much water do vines need?'\n\
• 'What are the signs of Leaf Rot?'\n\
• 'Organic fertilizers'\n\
...or **upload a photo** for diagnosis.";

const RULE: &str = "━━━━━━━━━━━━━━━";

/// `strftime` pattern for the time reply, after the calendar marker.
pub const TIME_FORMAT: &str = "%A, %d %B %Y | %I:%M %p";

pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS.choose(rng).copied().unwrap_or(GREETINGS[0])
}

/// Treatment plan for the session's current diagnosis.
pub fn treatment(ctx: &DiagnosisContext, knowledge: &KnowledgeBase) -> String {
    let Some(diagnosis) = ctx.current() else {
        return NEEDS_DIAGNOSIS.to_string();
    };

    let name = display_label(&diagnosis.label);
    let Some(entry) = knowledge.get(&diagnosis.label) else {
        tracing::debug!(label = %diagnosis.label, "no knowledge entry for label");
        return format!(
            "I see {name}, but I'm still learning the treatment for it. Try checking airflow."
        );
    };

    format!(
        "📋 **Diagnosis Summary**\n\
         {RULE}\n\
         🔍 **Issue:** {name}\n\
         ⚠️ **Severity:** {icon} {severity}\n\
         🎯 **Confidence:** {confidence:?}%\n\n\
         🧬 **Cause:** {cause}\n\
         🛠️ **Action:** {advice}\n\
         🌿 **Organic Fix:** {organic}\n\
         {RULE}",
        icon = entry.severity.icon(),
        severity = entry.severity,
        confidence = diagnosis.confidence,
        cause = entry.cause,
        advice = entry.advice,
        organic = entry.organic_remedy,
    )
}

/// Current date and time, e.g. `📅 Monday, 19 October 2026 | 03:07 PM`.
pub fn time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("📅 {}", now.format(TIME_FORMAT))
}

/// Classifier labels use underscores; replies show spaces.
pub fn display_label(label: &str) -> String {
    label.replace('_', " ")
}
