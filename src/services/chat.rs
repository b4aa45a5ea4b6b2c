//! Chatbot relay service
//!
//! Forwards visitor messages to the OpenAI chat-completion endpoint with
//! a portfolio system prompt. When no API key is configured, or the
//! upstream call fails, a canned keyword-matched reply is returned
//! instead. The chat endpoint never errors past validation.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::upstream::FetchError;

const OPENAI_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// System prompt grounding the assistant in the portfolio owner's profile
const PORTFOLIO_CONTEXT: &str = "\
You are an enthusiastic and knowledgeable AI assistant for Rachit Kesarwani's \
portfolio website. Rachit is a Full Stack Developer and AI/ML enthusiast based \
in India (email rachitkesarwani1000@gmail.com, GitHub R123achit). Frontend: \
React, Tailwind CSS, Framer Motion, Vite. Backend: Node.js, Express, MongoDB, \
REST API design. AI/ML: Python, TensorFlow, PyTorch, Scikit-learn, OpenCV. \
Competitive programming: LeetCode (R123achit) and CodeChef (r123achit, rating \
1497, 2-star). Be professional and conversational, share contact links when \
asked, and encourage visitors to reach out for collaborations.";

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

pub struct ChatService {
    http: Client,
    api_key: Option<String>,
}

impl ChatService {
    pub fn new(http: Client, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }

    /// Produce a reply for a visitor message; infallible by policy
    pub async fn reply(&self, message: &str) -> String {
        let Some(key) = &self.api_key else {
            return fallback_reply(message).to_string();
        };

        match self.complete(key, message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "chat completion failed, using canned reply");
                fallback_reply(message).to_string()
            }
        }
    }

    async fn complete(&self, api_key: &str, message: &str) -> Result<String, FetchError> {
        let body = json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": PORTFOLIO_CONTEXT},
                {"role": "user", "content": message},
            ],
            "max_tokens": 500,
            "temperature": 0.8,
        });

        let response = self
            .http
            .post(OPENAI_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| FetchError::Shape("completion response had no choices".to_string()))
    }
}

/// Canned replies keyed on common question topics
fn fallback_reply(message: &str) -> &'static str {
    let msg = message.to_lowercase();

    if msg.contains("skill") || msg.contains("technology") || msg.contains("tech stack") {
        "Rachit is a versatile Full Stack Developer. On the frontend he works \
         with React, Vite, Tailwind CSS and Framer Motion; on the backend with \
         Node.js, Express and MongoDB. He also builds AI/ML solutions with \
         Python, TensorFlow, PyTorch and Scikit-learn, and applies competitive \
         programming experience to write efficient, optimized code. Want to \
         know more about any specific technology?"
    } else if msg.contains("project") || msg.contains("work") {
        "Rachit has built full-stack MERN applications, AI/ML models, and this \
         portfolio itself, featuring live coding stats from the LeetCode and \
         CodeChef APIs, an AI chatbot, and a contact form backed by a \
         database. Check out the Portfolio section above to see his work in \
         detail!"
    } else if msg.contains("contact")
        || msg.contains("email")
        || msg.contains("reach")
        || msg.contains("hire")
    {
        "You can reach Rachit at rachitkesarwani1000@gmail.com, on GitHub at \
         https://github.com/R123achit, or via the contact form on this site. \
         He's open to full-time roles, freelance work, and collaborations, and \
         typically responds within 24 hours."
    } else if msg.contains("leetcode")
        || msg.contains("codechef")
        || msg.contains("competitive")
        || msg.contains("coding stat")
    {
        "Rachit is active in competitive programming: he solves algorithmic \
         problems on LeetCode (R123achit) and competes on CodeChef (r123achit, \
         rating 1497, 2-star, global rank 141,515). You can see his live stats \
         in the Coding Stats section above!"
    } else if msg.contains("experience") || msg.contains("about") || msg.contains("who") {
        "Rachit Kesarwani is a passionate Full Stack Developer and AI/ML \
         enthusiast based in India, proficient across the MERN stack and \
         modern machine-learning frameworks, with strong problem-solving \
         skills from competitive programming. Ask about his skills, projects, \
         or how to get in touch!"
    } else {
        "Hello! I'm Rachit's AI assistant. I can tell you about his skills and \
         technologies, the projects he's built, his experience, his \
         competitive-programming achievements, or how to contact him for \
         opportunities. What would you like to know?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_uses_canned_reply() {
        let service = ChatService::new(Client::new(), None);
        let reply = service.reply("what are his skills?").await;
        assert!(reply.contains("Full Stack Developer"));
    }

    #[test]
    fn fallback_matches_topics_case_insensitively() {
        assert!(fallback_reply("Tell me about his SKILLS").contains("frontend"));
        assert!(fallback_reply("any projects?").contains("portfolio"));
        assert!(fallback_reply("how do I hire him").contains("rachitkesarwani1000@gmail.com"));
        assert!(fallback_reply("codechef rating?").contains("1497"));
        assert!(fallback_reply("who is rachit").contains("India"));
    }

    #[test]
    fn unmatched_message_gets_default_reply() {
        assert!(fallback_reply("asdf").starts_with("Hello!"));
    }

    #[test]
    fn completion_response_decodes() {
        let raw: CompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "hi there"}}]
        }))
        .unwrap();
        assert_eq!(raw.choices[0].message.content, "hi there");
    }
}
