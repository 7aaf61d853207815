//! Transcript rendering for prompt-only models.

use switchboard_protocols::{ChatRequest, MessageRole};

use crate::api::{InferenceRequest, Parameters};

/// Render the conversation as one prompt ending with an open assistant turn.
pub fn render_transcript(request: &ChatRequest) -> String {
    let mut prompt = String::new();
    for message in request.ordered_messages() {
        let label = match message.role {
            MessageRole::System => "System",
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        };
        prompt.push_str(label);
        prompt.push_str(": ");
        prompt.push_str(&message.content);
        prompt.push('\n');
    }
    prompt.push_str("Assistant:");
    prompt
}

pub fn build_request(request: &ChatRequest) -> InferenceRequest {
    InferenceRequest {
        inputs: render_transcript(request),
        parameters: Parameters {
            max_new_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
            return_full_text: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_protocols::ChatMessage;

    #[test]
    fn test_render_transcript() {
        let request = ChatRequest::new(
            "",
            vec![
                ChatMessage::user("Hi"),
                ChatMessage::system("Be brief"),
                ChatMessage::assistant("Hello"),
                ChatMessage::user("Bye"),
            ],
        );
        assert_eq!(
            render_transcript(&request),
            "System: Be brief\nUser: Hi\nAssistant: Hello\nUser: Bye\nAssistant:"
        );
    }

    #[test]
    fn test_build_request_parameters() {
        let request = ChatRequest::new("", vec![ChatMessage::user("Hi")]).with_max_tokens(50);
        let json = serde_json::to_value(build_request(&request)).unwrap();
        assert_eq!(json["parameters"]["max_new_tokens"], 50);
        assert_eq!(json["parameters"]["return_full_text"], false);
        assert!(json["parameters"].get("top_p").is_none());
    }
}
