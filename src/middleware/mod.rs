pub use json_payload::JsonPayload;

mod json_payload;
