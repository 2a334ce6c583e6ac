pub mod audio_payload;
pub mod candidate;
pub mod candidate_content;
pub mod candidate_part;
pub mod content;
pub mod generate_request;
pub mod generate_response;
pub mod generation_config;
pub mod inline_data;
pub mod part;
