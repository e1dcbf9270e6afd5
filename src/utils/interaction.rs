//! User interaction utilities.

use std::io::{self, BufRead, Write};

/// Prompts on stdout and reads the answer from stdin. Returns true if the user
/// confirms.
pub fn confirm(prompt: &str) -> bool { confirm_with(prompt, &mut io::stdin().lock(), &mut io::stdout()) }

/// Prompts on `output` and reads a single answer line from `input`.
pub fn confirm_with(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
	write!(output, "{prompt} (y/N): ").ok();
	output.flush().ok();
	let mut answer = String::new();
	input.read_line(&mut answer).ok();
	matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn answer(text: &str) -> (bool, String) {
		let mut output = Vec::new();
		let confirmed = confirm_with("Overwrite?", &mut text.as_bytes(), &mut output);
		(confirmed, String::from_utf8(output).unwrap())
	}

	#[test]
	fn accepts_yes_variants() {
		assert!(answer("y\n").0);
		assert!(answer("Yes\n").0);
		assert_eq!(answer("y\n").1, "Overwrite? (y/N): ");
	}

	#[test]
	fn anything_else_declines() {
		assert!(!answer("\n").0);
		assert!(!answer("nope\n").0);
		assert!(!answer("").0);
	}
}
