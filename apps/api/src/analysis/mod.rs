// Analysis gateway: prompt construction, response schemas, and the two
// model calls. All model traffic goes through llm_client.

pub mod gateway;
pub mod handlers;
pub mod prompts;
