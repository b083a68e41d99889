use super::types::ChatMessage;

/// Instructs the model to act as the ITMO information agent and to reply with
/// a bare JSON object holding `answer` and `reasoning`.
pub const DEFAULT_SYSTEM_PROMPT: &str = concat!(
    "Ты — официальный информационный агент Университета ИТМО.\n",
    "Если вопрос содержит варианты (1..N), выбери нужный вариант.\n",
    "Если нет вариантов — answer=null.\n",
    "Ответ ДОЛЖЕН быть в формате JSON, без лишних слов:\n",
    "{\n",
    "  \"answer\": 2 или null,\n",
    "  \"reasoning\": \"Пояснение...\"\n",
    "}\n\n",
);

pub fn build_messages(system_prompt: &str, query: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system_prompt), ChatMessage::user(query)]
}
