//! Prompt templates sent to the generative model.
//!
//! Every prompt lists all business fields, declares the output language as
//! `Language: <label> (<code>)`, and spells out the delimiter convention the
//! parser expects.

use gmb_writer_core::ContentType;

pub(crate) const POST_PROMPT: &str = r#"Create 3 Google My Business posts for a business with the following details:
- Business Name: {{business_name}}
- Category: {{category}}
- Website: {{website}}
- Address: {{address}}
- Phone: {{phone}}
- Hours: {{hours}}

Post Type: {{post_kind_label}} ({{post_kind}})
Tone: {{tone}}
Language: {{language_label}} ({{language_code}})

Please create 3 unique posts that would be appropriate for Google My Business.
Each post should be concise (under 1500 characters), include relevant hashtags,
and be optimized for local search.

Format each post as plain text with appropriate line breaks and emojis where relevant.
Do not include any explanations, just the 3 posts separated with triple dashes (---).
"#;

pub(crate) const DESCRIPTION_PROMPT: &str = r#"You are a professional Google My Business SEO and content specialist.
Create one optimized business description for Google My Business with these details:

- Business Name: {{business_name}}
- Category: {{category}}
- Website: {{website}}
- Address: {{address}}
- Phone: {{phone}}
- Hours: {{hours}}
- Key Features/Highlights: {{highlights}}

Tone: {{tone}}
Language: {{language_label}} ({{language_code}})

Guidelines for the description:
- Keep it between 150-450 characters (Google's limit is 750)
- Start with the most important information about the business
- Include natural keywords related to the business category
- Highlight unique selling propositions and featured services
- Include a call-to-action
- Avoid excessive use of capital letters, special characters, or emojis
- Focus on local SEO optimization for the specific location
- Be authentic and avoid marketing clichés

Instructions:
- Format: plain text with appropriate line breaks.
- Return exactly one description. Do not use separators such as three dashes (---).
- No titles, explanations, or numbering.
- Do NOT include explanatory text or any output besides the description itself.
"#;

pub(crate) const REVIEW_REPLY_PROMPT: &str = r#"You are a professional Google My Business customer service specialist.
Write one appropriate reply to the following {{review_kind_label}} customer review for a business with these details:

- Business Name: {{business_name}}
- Category: {{category}}
- Website: {{website}}
- Address: {{address}}
- Phone: {{phone}}
- Hours: {{hours}}

Review: "{{review_text}}"

Review Type: {{review_kind_label}}
Tone: {{tone}}
Language: {{language_label}} ({{language_code}})

Guidelines for the reply:
- Start with a personalized greeting
- For positive reviews: express gratitude, highlight what the customer liked, invite them back
- For negative reviews: apologize sincerely, address their concerns, offer a solution, invite to discuss privately
- For questions: provide clear information if it's general business info, or suggest contacting the business directly
- Keep the reply between 50-150 words
- Never be defensive
- Personalize based on the review content rather than using a generic template
- End with a friendly sign-off including the business name

Instructions:
- Format: plain text with appropriate line breaks.
- Return exactly one reply. Do not use separators such as three dashes (---).
- No titles, explanations, or numbering.
"#;

pub(crate) const QA_PROMPT: &str = r#"You are a professional Google My Business SEO and content specialist.
Create 5 frequently asked questions with answers for a Google My Business profile with these details:

- Business Name: {{business_name}}
- Category: {{category}}
- Website: {{website}}
- Address: {{address}}
- Phone: {{phone}}
- Hours: {{hours}}
- Topics to cover: {{topics}}

Tone: {{tone}}
Language: {{language_label}} ({{language_code}})

Guidelines for Q&A content:
- Questions should be ones potential customers would actually ask
- Answers should be comprehensive but concise (50-100 words each)
- Include factual information from the business details provided
- Where specific information is not provided, use general answers appropriate for the business type
- Address practical information like parking, accessibility, price ranges, etc.

Instructions:
- Format each pair exactly as "Question: [question]" on one line followed by "Answer: [answer]".
- Keep the words "Question:" and "Answer:" in English even when writing in another language.
- Separate each pair with three dashes (---).
- Do NOT include explanatory text or any output besides the Q&A content itself.
"#;

/// Template id and source for every content type's prompt.
pub(crate) fn prompt_sources() -> [(ContentType, &'static str); 4] {
    [
        (ContentType::Post, POST_PROMPT),
        (ContentType::Description, DESCRIPTION_PROMPT),
        (ContentType::ReviewReply, REVIEW_REPLY_PROMPT),
        (ContentType::Qa, QA_PROMPT),
    ]
}
