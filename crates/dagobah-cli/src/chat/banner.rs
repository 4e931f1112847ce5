//! Welcome banner for the chat session.

use console::style;

/// Print the welcome banner after the preflight gates pass.
pub fn print_welcome(model: &str) {
    println!();
    println!("  {}", style("Master Yoda").cyan().bold());
    println!(
        "  {}",
        style("\"Do or do not, there is no try.\"").dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!();
    println!(
        "  {}",
        style("Type your message to chat, 'help' for guidance, 'quit' to leave").dim()
    );
    println!("  {}", style("---").dim());
    println!();
    println!("Strong with the Force, ready I am. Speak, you may.");
    println!();
}
