pub mod text_to_speech_request;
pub mod text_to_speech_response;
pub mod translate_request;
pub mod translate_response;
