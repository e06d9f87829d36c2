//! Terminal-backed collaborators: toasts on stderr and yes/no prompts on stdin.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::{
    application::ports::{Confirm, Notify, ToastVariant},
    i18n::Translator,
    presentation::toast::Toast,
};

/// Prints toasts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, message: &str, variant: ToastVariant) {
        let toast = Toast::new(message, variant);
        info!(
            target = "infra::console::toast",
            id = %toast.id,
            variant = variant.as_str(),
            ttl_ms = toast.ttl_ms,
            "{}",
            toast.text
        );
        eprintln!("{}", toast.render());
    }
}

/// Answers every confirmation with yes.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Asks on stderr and reads one line from stdin.
#[derive(Debug, Clone, Copy)]
pub struct PromptConfirm {
    translator: Translator,
}

impl PromptConfirm {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }
}

#[async_trait]
impl Confirm for PromptConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let common = &self.translator.texts().common;
        let prompt = format!("{message} {} ", common.prompt_suffix);

        let mut stderr = tokio::io::stderr();
        if let Err(err) = stderr.write_all(prompt.as_bytes()).await {
            warn!(target = "infra::console::confirm", error = %err, "failed to write prompt");
        }
        if let Err(err) = stderr.flush().await {
            warn!(target = "infra::console::confirm", error = %err, "failed to flush prompt");
        }

        let mut line = String::new();
        match BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
            Ok(_) => is_affirmative(&line, common.yes_answers),
            Err(err) => {
                warn!(target = "infra::console::confirm", error = %err, "failed to read answer");
                false
            }
        }
    }
}

/// Whether `answer` is one of the accepted yes words. Anything else,
/// including an empty line, declines.
pub fn is_affirmative(answer: &str, yes_answers: &[&str]) -> bool {
    let answer = answer.trim().to_lowercase();
    !answer.is_empty() && yes_answers.iter().any(|yes| *yes == answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn yes_words_follow_language() {
        let en = Translator::new(Language::En).texts().common.yes_answers;
        let tr = Translator::new(Language::Tr).texts().common.yes_answers;

        assert!(is_affirmative("Y\n", en));
        assert!(is_affirmative(" yes ", en));
        assert!(!is_affirmative("\n", en));
        assert!(!is_affirmative("no", en));
        assert!(is_affirmative("evet\n", tr));
    }

    #[tokio::test]
    async fn auto_confirm_always_agrees() {
        assert!(AutoConfirm.confirm("anything").await);
    }
}
