use crate::error::{Error, Result};

/// Encodes `text` as UTF-16 without a terminator.
pub fn to_wide(text: &str) -> Vec<u16> {
	text.encode_utf16().collect()
}

/// Decodes UTF-16 up to the first NUL, if any.
pub fn from_wide(units: &[u16]) -> Result<String> {
	let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
	String::from_utf16(&units[..end]).map_err(|_| Error::InvalidUtf16)
}

/// NUL-terminated UTF-16 buffer with room for `N - 1` code units.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedText<const N: usize> {
	units: [u16; N],
	len: usize,
	truncated: bool,
}

impl<const N: usize> FixedText<N> {
	pub const CAPACITY: usize = N - 1;

	/// Copies `units`, truncating to capacity. A high surrogate left dangling
	/// by the cut is dropped with its pair.
	pub fn from_wide(units: &[u16]) -> Self {
		let mut len = units.len().min(Self::CAPACITY);
		let truncated = len < units.len();
		if truncated && len > 0 && is_high_surrogate(units[len - 1]) {
			len -= 1;
		}
		let mut buf = [0u16; N];
		buf[..len].copy_from_slice(&units[..len]);
		Self { units: buf, len, truncated }
	}

	pub fn new(text: &str) -> Self {
		Self::from_wide(&to_wide(text))
	}

	pub fn as_units(&self) -> &[u16] {
		&self.units[..self.len]
	}

	/// The whole buffer, terminator and padding included.
	pub const fn raw(&self) -> &[u16; N] {
		&self.units
	}

	pub const fn len(&self) -> usize {
		self.len
	}

	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub const fn was_truncated(&self) -> bool {
		self.truncated
	}

	pub fn to_string_lossy(&self) -> String {
		String::from_utf16_lossy(self.as_units())
	}
}

impl<const N: usize> Default for FixedText<N> {
	fn default() -> Self {
		Self { units: [0; N], len: 0, truncated: false }
	}
}

impl<const N: usize> std::fmt::Debug for FixedText<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.to_string_lossy())
	}
}

const fn is_high_surrogate(unit: u16) -> bool {
	matches!(unit, 0xD800..=0xDBFF)
}
