//! Turning raw model text into shaped content.

use gmb_writer_core::{ContentBody, ContentType, Language, QaPair};

const SEPARATOR: &str = "---";
const QUESTION_LABELS: [&str; 2] = ["Question:", "Q:"];
const ANSWER_LABELS: [&str; 2] = ["Answer:", "A:"];

/// Shape `text` according to the conventions the prompt for `content_type`
/// asked for.
///
/// Anything that yields no usable content becomes a localized placeholder.
///
/// # Examples
///
/// ```
/// use gmb_writer_core::{ContentBody, ContentType, Language};
/// use gmb_writer_prompt::parse_response;
///
/// let body = parse_response(ContentType::Post, "First\n---\n\n---\nSecond", Language::EnUs);
/// assert_eq!(body, ContentBody::Variants(vec!["First".into(), "Second".into()]));
///
/// let empty = parse_response(ContentType::Description, "   ", Language::EnUs);
/// assert!(empty.is_placeholder());
/// ```
pub fn parse_response(content_type: ContentType, text: &str, language: Language) -> ContentBody {
    let body = match content_type {
        ContentType::Post => {
            let variants = split_blocks(text);
            (!variants.is_empty()).then(|| ContentBody::Variants(variants))
        }
        ContentType::Description | ContentType::ReviewReply => {
            let text = text.trim();
            (!text.is_empty()).then(|| ContentBody::Text(text.to_string()))
        }
        ContentType::Qa => {
            let pairs: Vec<QaPair> = split_blocks(text)
                .iter()
                .flat_map(|block| parse_qa_pairs(block))
                .collect();
            (!pairs.is_empty()).then(|| ContentBody::QuestionsAndAnswers(pairs))
        }
    };

    body.unwrap_or_else(|| {
        tracing::warn!(%content_type, "Response contained no usable content");
        ContentBody::Placeholder(language.empty_result_placeholder().to_string())
    })
}

fn split_blocks(text: &str) -> Vec<String> {
    text.split(SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip markdown emphasis and a leading label, returning the remainder.
fn strip_label<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let line = line.trim_start_matches(|c: char| c == '*' || c == '#' || c.is_whitespace());
    labels.iter().find_map(|label| {
        line.strip_prefix(label)
            .map(|rest| rest.trim_start_matches(|c: char| c == '*' || c.is_whitespace()))
    })
}

/// Parse every question/answer pair in `block`.
///
/// A question label always starts a new pair, so pairs that were not
/// separated by `---` still come out apart.
fn parse_qa_pairs(block: &str) -> Vec<QaPair> {
    let mut pairs = Vec::new();
    let mut question: Option<String> = None;
    let mut answer: Option<String> = None;

    for line in block.lines() {
        if let Some(rest) = strip_label(line, &QUESTION_LABELS) {
            finish_pair(&mut pairs, question.take(), answer.take());
            question = Some(rest.trim().to_string());
            continue;
        }
        if question.is_some() && answer.is_none() {
            if let Some(rest) = strip_label(line, &ANSWER_LABELS) {
                answer = Some(rest.trim().to_string());
                continue;
            }
        }

        // Continuation lines belong to whichever part is open
        let target = match (&mut answer, &mut question) {
            (Some(a), _) => a,
            (None, Some(q)) => q,
            (None, None) => continue,
        };
        let line = line.trim();
        if !line.is_empty() {
            if !target.is_empty() {
                target.push('\n');
            }
            target.push_str(line);
        }
    }

    finish_pair(&mut pairs, question, answer);
    pairs
}

fn finish_pair(pairs: &mut Vec<QaPair>, question: Option<String>, answer: Option<String>) {
    if let (Some(q), Some(a)) = (question, answer) {
        if !q.is_empty() && !a.is_empty() {
            pairs.push(QaPair::new(q, a));
        }
    }
}
