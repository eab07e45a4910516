use cocorahs::commands::{CmdMessage, MessageLevel};
use console::{Style, Term};

fn style_for(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Success => Style::new().green(),
        MessageLevel::Error => Style::new().red(),
    }
}

/// One line per message. Styling is applied only when `colored` is set.
pub fn render_messages(messages: &[CmdMessage], colored: bool) -> String {
    messages
        .iter()
        .map(|msg| {
            let line = style_for(msg.level)
                .force_styling(colored)
                .apply_to(&msg.content);
            format!("{}\n", line)
        })
        .collect()
}

/// Writes messages to stdout, colored when stdout is a terminal.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages, Term::stdout().features().colors_supported());
    if !output.is_empty() {
        print!("{}", output);
    }
}
