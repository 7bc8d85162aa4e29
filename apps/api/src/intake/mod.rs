// Intake form: reducer-style state transitions, autofill, and submit packaging.
// Gateway calls go through analysis::gateway; nothing here talks to Gemini.

pub mod autofill;
pub mod handlers;
pub mod state;
