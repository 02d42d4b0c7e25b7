use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_MESSAGE_LENGTH: usize = 2000;

const CODE_FENCE: &str = "```";
// Leaves room for a reopened fence before and a closing fence after a line.
const MAX_LINE_LENGTH: usize = MAX_MESSAGE_LENGTH - 2 * (CODE_FENCE.len() + 1);

/// Body of Discord's create message endpoint.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateMessage {
    pub content: String,
}

/// What a command sends back to its channel. `Lines` are rendered one per line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Reply {
    Text(String),
    Lines(Vec<String>),
}

/// A split reply failed after some of its messages were already posted.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Delivered {delivered} of {total} messages before failing: {reason}")]
pub struct PartialDelivery {
    pub delivered: usize,
    pub total: usize,
    pub reason: String,
}

impl Reply {
    pub fn to_text(&self) -> String {
        match self {
            Reply::Text(text) => text.clone(),
            Reply::Lines(lines) => lines.join("\n"),
        }
    }

    /// Splits the reply into message contents that fit Discord's length limit.
    /// Breaks happen at line boundaries; a code block cut by a break is closed
    /// and reopened so both messages render it.
    pub fn into_contents(self) -> Vec<String> {
        let text = self.to_text();
        if text.chars().count() <= MAX_MESSAGE_LENGTH {
            return vec![text];
        }

        let mut splitter = ContentSplitter::default();
        for line in text.split('\n') {
            let chars = line.chars().collect::<Vec<_>>();
            if chars.len() <= MAX_LINE_LENGTH {
                splitter.push_line(line);
                continue;
            }

            let mut pieces = chars.chunks(MAX_LINE_LENGTH).peekable();
            while let Some(piece) = pieces.next() {
                splitter.push_line(&piece.iter().collect::<String>());
                if pieces.peek().is_some() {
                    splitter.flush();
                }
            }
        }
        splitter.finish()
    }
}

#[derive(Default)]
struct ContentSplitter {
    contents: Vec<String>,
    current: String,
    current_length: usize,
    in_code_block: bool,
}

impl ContentSplitter {
    fn push_line(&mut self, line: &str) {
        let line_length = line.chars().count();
        let in_code_block_after = self.in_code_block ^ (line.matches(CODE_FENCE).count() % 2 == 1);
        let reserved = if in_code_block_after {
            CODE_FENCE.len() + 1
        } else {
            0
        };
        let separator = usize::from(!self.current.is_empty());
        if !self.current.is_empty()
            && self.current_length + separator + line_length + reserved > MAX_MESSAGE_LENGTH
        {
            self.flush();
        }

        if !self.current.is_empty() {
            self.current.push('\n');
            self.current_length += 1;
        }
        self.current.push_str(line);
        self.current_length += line_length;
        self.in_code_block = in_code_block_after;
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }

        if self.in_code_block {
            self.current.push('\n');
            self.current.push_str(CODE_FENCE);
        }
        self.contents.push(std::mem::take(&mut self.current));

        if self.in_code_block {
            self.current.push_str(CODE_FENCE);
            self.current_length = CODE_FENCE.len();
        } else {
            self.current_length = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() {
            self.contents.push(self.current);
        }
        self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reply_is_a_single_message() {
        let reply = Reply::Lines(vec!["a".into(), "b".into()]);
        assert_eq!(reply.into_contents(), vec!["a\nb".to_string()]);
    }

    #[test]
    fn long_reply_is_split_at_line_boundaries() {
        let line = "x".repeat(900);
        let reply = Reply::Lines(vec![line.clone(), line.clone(), line.clone()]);
        let contents = reply.into_contents();
        assert_eq!(contents, vec![format!("{}\n{}", line, line), line]);
        assert!(contents
            .iter()
            .all(|content| content.chars().count() <= MAX_MESSAGE_LENGTH));
    }

    #[test]
    fn overlong_line_is_split_by_characters() {
        let reply = Reply::Text("ą".repeat(MAX_MESSAGE_LENGTH * 2 + 5));
        let contents = reply.into_contents();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].chars().count(), MAX_LINE_LENGTH);
        assert_eq!(contents[1].chars().count(), MAX_LINE_LENGTH);
        assert_eq!(
            contents.iter().map(|c| c.chars().count()).sum::<usize>(),
            MAX_MESSAGE_LENGTH * 2 + 5
        );
    }

    #[test]
    fn code_block_is_reopened_across_messages() {
        let mut lines = vec!["**Pytanie 1:**   Co wypisze ten kod?".to_string(), "```js".to_string()];
        lines.extend((0..30).map(|i| format!("console.log({}); // {}", i, "y".repeat(80))));
        lines.push("```".to_string());
        let contents = Reply::Lines(lines).into_contents();

        assert_eq!(contents.len(), 2);
        assert!(contents[0].ends_with("\n```"));
        assert!(contents[1].starts_with("```\nconsole.log("));
        for content in &contents {
            assert!(content.chars().count() <= MAX_MESSAGE_LENGTH);
            assert_eq!(content.matches(CODE_FENCE).count() % 2, 0, "{}", content);
        }
    }

    #[test]
    fn inline_fences_do_not_open_a_block() {
        let usage = "Nie znalazłam takiego języka 😭 ```Format: !quiz```".to_string();
        let mut lines = vec![usage];
        lines.extend((0..3).map(|_| "z".repeat(900)));
        let contents = Reply::Lines(lines).into_contents();

        assert!(contents
            .iter()
            .all(|content| content.matches(CODE_FENCE).count() % 2 == 0));
        assert!(!contents[1].starts_with(CODE_FENCE));
    }
}
