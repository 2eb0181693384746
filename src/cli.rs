use std::path::PathBuf;

use clap::Parser;

/// Edit a fixed window of a file in place.
#[derive(Debug, Parser)]
#[command(name = "mapvi", version, about)]
pub struct Cli {
	/// File to edit
	pub path: PathBuf,

	/// Byte offset of the window inside the file (decimal, 0x hex or 0 octal)
	#[arg(value_parser = parse_offset)]
	pub offset: u64,

	/// Window length in bytes (decimal, 0x hex or 0 octal)
	#[arg(value_parser = parse_size)]
	pub size: usize,

	/// Config file to use instead of the per-user one
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

/// Parses an unsigned integer the way `strtoul(.., 0)` picks its base.
pub fn parse_offset(text: &str) -> Result<u64, String> {
	let text = text.trim();
	let (digits, radix) = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
		(hex, 16)
	} else if text.len() > 1 && text.starts_with('0') {
		(&text[1..], 8)
	} else {
		(text, 10)
	};
	u64::from_str_radix(digits, radix).map_err(|err| format!("invalid number {:?}: {}", text, err))
}

pub fn parse_size(text: &str) -> Result<usize, String> {
	let value = parse_offset(text)?;
	usize::try_from(value).map_err(|_| format!("size {} does not fit in memory", value))
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::{Cli, parse_offset};

	#[test]
	fn numbers_accept_decimal_hex_and_octal() {
		assert_eq!(parse_offset("4096"), Ok(4096));
		assert_eq!(parse_offset("0x1000"), Ok(4096));
		assert_eq!(parse_offset("0X1f"), Ok(31));
		assert_eq!(parse_offset("010"), Ok(8));
		assert_eq!(parse_offset("0"), Ok(0));
		assert!(parse_offset("0xzz").is_err());
		assert!(parse_offset("-1").is_err());
		assert!(parse_offset("").is_err());
	}

	#[test]
	fn cli_takes_path_offset_and_size() {
		let cli = Cli::try_parse_from(["mapvi", "disk.img", "0x200", "512"]).expect("arguments should parse");
		assert_eq!(cli.path.to_str(), Some("disk.img"));
		assert_eq!(cli.offset, 0x200);
		assert_eq!(cli.size, 512);
		assert!(cli.config.is_none());
	}

	#[test]
	fn wrong_argument_count_is_a_usage_error() {
		assert!(Cli::try_parse_from(["mapvi", "disk.img", "0"]).is_err());
		assert!(Cli::try_parse_from(["mapvi", "disk.img", "0", "1", "2"]).is_err());
	}
}
