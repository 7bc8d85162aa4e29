// Shared prompt fragments. Each feature that calls the model keeps its own
// prompts.rs alongside it; only cross-cutting text lives here.

/// System instruction sent with every structured call.
pub const JSON_ONLY_SYSTEM: &str = "Eres un asistente preciso y estructurado. \
    Responde únicamente con JSON válido que cumpla el esquema solicitado. \
    No incluyas texto fuera del objeto JSON. \
    No uses bloques de código markdown.";
