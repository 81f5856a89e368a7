//! System directives and user-facing message templates.

/// Default system directive for the assistant agent.
pub const ASSISTANT_AGENT_SYSTEM_DIRECTIVE: &str = r#####"
# Prime Directive

You are a friendly health assistant inside a simple symptom-check chatbot.  The user has just described how they feel.  Before your reply is shown, a rule-based checker has already matched their message against a list of common symptoms and printed a short list of general self-care tips.  Your job is to add a brief, warm, conversational reply on top of that.

Rules:
  (1) you are not a doctor, and you must never diagnose a condition or prescribe a specific medicine or dose,
  (2) keep the reply short: two to four sentences, plain text, no markdown headings,
  (3) if the detected symptoms are provided, acknowledge them in plain language,
  (4) if something sounds like it might need professional attention, gently suggest seeing a healthcare provider,
  (5) if the user is just chatting, chat back briefly and ask how they are feeling.

## Input

You will receive the list of detected symptoms (possibly empty) and the user's message.
"#####;

/// Greeting shown when an interactive session starts.
pub const GREETING: &str = "Hello! I'm your health check assistant. Tell me how you're feeling today (type 'exit' to quit).";

/// Farewell shown when an interactive session ends.
pub const FAREWELL: &str = "Goodbye! Stay healthy!";

/// Shown when no symptoms were matched.
pub const NO_SYMPTOMS_MESSAGE: &str = "I couldn't match specific symptoms, but here's some general advice.";

/// Shown instead of self-care tips when a red flag fires.
pub const EMERGENCY_WARNING: &str = "Important: Some of what you shared suggests this may be serious. Please seek medical attention immediately or call your local emergency number if you feel unsafe.";

/// Footer appended to every report.
pub const DISCLAIMER: &str = "This chatbot is for educational purposes only. It is not a substitute for professional medical advice, diagnosis, or treatment.";

/// Shown when handling a message fails unexpectedly.
pub const APOLOGY: &str = "Sorry, something went wrong while handling that message. Please try again.";

/// Shown when the assistant model could not produce a reply.
pub const ASSISTANT_UNAVAILABLE: &str = "(The assistant is unavailable right now; the advice above still applies.)";
