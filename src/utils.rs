use console::{Color, Style};

/// # `MessageType`
/// Trait for message types.
trait MessageType {
    /// The prefix for each message type (e.g., "🚨 ERROR")
    const PREFIX: &'static str;

    /// Colour of the prefix when the output is a terminal
    const COLOR: Color;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;
}

struct Error;
struct Warning;
struct Success;

impl MessageType for Error {
    const PREFIX: &'static str = "🚨 ERROR";
    const COLOR: Color = Color::Red;
    const TO_STDERR: bool = true;
}

impl MessageType for Warning {
    const PREFIX: &'static str = "⚠️ WARNING";
    const COLOR: Color = Color::Yellow;
}

impl MessageType for Success {
    const PREFIX: &'static str = "✅ SUCCESS";
    const COLOR: Color = Color::Green;
}

/// # `format_message`
/// Formats a message without suggestion.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message.
///
/// ## Returns
/// * String - The formatted message.
fn format_message<T: MessageType>(title: &str, details: &str) -> String {
    let style = Style::new().fg(T::COLOR).bold();
    let style = if T::TO_STDERR {
        style.for_stderr()
    } else {
        style.for_stdout()
    };

    format!("{}: {title}\n\n{details}", style.apply_to(T::PREFIX))
}

fn emit<T: MessageType>(message: &str) {
    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
/// - `suggestion`: The suggestion for resolving the error.
pub fn print_error(title: &str, details: &str, suggestion: &str) {
    emit::<Error>(&format!(
        "{}\n\n{suggestion}",
        format_message::<Error>(title, details)
    ));
}

/// # `print_warning`
/// Prints a warning message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the warning message.
/// - `details`: The details of the warning message.
pub fn print_warning(title: &str, details: &str) {
    emit::<Warning>(&format_message::<Warning>(title, details));
}

/// # `print_success`
/// Prints a success message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the success message.
/// - `details`: The details of the success message.
pub fn print_success(title: &str, details: &str) {
    emit::<Success>(&format_message::<Success>(title, details));
}
