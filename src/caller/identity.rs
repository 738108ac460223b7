//! Strongly typed caller identity values.

// self
use crate::_prelude::*;

const PACKAGE_NAME_MAX_LEN: usize = 256;
const FINGERPRINT_PAIRS: usize = 32;
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Error returned when package-name validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum PackageNameError {
	/// The package name was empty.
	#[error("Package name cannot be empty.")]
	Empty,
	/// The package name contains whitespace characters.
	#[error("Package name contains whitespace.")]
	ContainsWhitespace,
	/// The package name exceeded the allowed character count.
	#[error("Package name exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Application package name as reported by the host platform.
///
/// Comparison against the configured counterpart is ASCII-case-insensitive; use
/// [`matches_ignore_ascii_case`](Self::matches_ignore_ascii_case) rather than `==` when checking
/// an untrusted caller string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);
impl PackageName {
	/// Creates a new package name after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, PackageNameError> {
		let view = value.as_ref();

		validate_package_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Compares against a raw caller-supplied string, ignoring ASCII case.
	pub fn matches_ignore_ascii_case(&self, other: &str) -> bool {
		self.0.eq_ignore_ascii_case(other)
	}
}
impl Deref for PackageName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for PackageName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for PackageName {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<PackageName> for String {
	fn from(value: PackageName) -> Self {
		value.0
	}
}
impl TryFrom<String> for PackageName {
	type Error = PackageNameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_package_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for PackageName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Package({})", self.0)
	}
}
impl Display for PackageName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for PackageName {
	type Err = PackageNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

/// Error returned when fingerprint parsing fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum FingerprintParseError {
	/// The fingerprint does not contain exactly 32 colon-separated segments.
	#[error("Fingerprint must contain {expected} colon-separated byte pairs, found {got}.")]
	SegmentCount {
		/// Required segment count.
		expected: usize,
		/// Observed segment count.
		got: usize,
	},
	/// A segment is not a two-digit hex byte.
	#[error("Fingerprint segment `{segment}` is not a two-digit hex byte.")]
	MalformedSegment {
		/// The offending segment.
		segment: String,
	},
}

/// Canonical SHA-256 signing-certificate fingerprint.
///
/// Rendered as 64 uppercase hex characters grouped in colon-separated byte pairs
/// (`A1:B2:…`), no trailing colon. Construction canonicalizes letter case, so equality and
/// hashing behave case-insensitively with respect to the original input. The value is derived,
/// never stored: it is recomputed on every verification.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CertificateFingerprint(String);
impl CertificateFingerprint {
	/// Byte length of the underlying SHA-256 digest.
	pub const DIGEST_LEN: usize = FINGERPRINT_PAIRS;

	/// Renders a raw SHA-256 digest in the canonical wire form.
	pub fn from_digest(digest: &[u8; Self::DIGEST_LEN]) -> Self {
		let mut buf = String::with_capacity(Self::DIGEST_LEN * 3 - 1);

		for (idx, byte) in digest.iter().enumerate() {
			if idx > 0 {
				buf.push(':');
			}

			buf.push(HEX_UPPER[(byte >> 4) as usize] as char);
			buf.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
		}

		Self(buf)
	}

	/// Parses a textual fingerprint in any letter case, canonicalizing to uppercase.
	pub fn parse(value: impl AsRef<str>) -> Result<Self, FingerprintParseError> {
		let mut digest = [0_u8; Self::DIGEST_LEN];
		let mut count = 0;

		for segment in value.as_ref().split(':') {
			if count == Self::DIGEST_LEN {
				count += 1;

				break;
			}
			if segment.len() != 2 || !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
				return Err(FingerprintParseError::MalformedSegment { segment: segment.into() });
			}

			digest[count] = u8::from_str_radix(segment, 16)
				.map_err(|_| FingerprintParseError::MalformedSegment { segment: segment.into() })?;
			count += 1;
		}

		if count != Self::DIGEST_LEN {
			return Err(FingerprintParseError::SegmentCount {
				expected: Self::DIGEST_LEN,
				got: count,
			});
		}

		Ok(Self::from_digest(&digest))
	}
}
impl AsRef<str> for CertificateFingerprint {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<CertificateFingerprint> for String {
	fn from(value: CertificateFingerprint) -> Self {
		value.0
	}
}
impl TryFrom<String> for CertificateFingerprint {
	type Error = FingerprintParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
impl Debug for CertificateFingerprint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Fingerprint({})", self.0)
	}
}
impl Display for CertificateFingerprint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for CertificateFingerprint {
	type Err = FingerprintParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

fn validate_package_view(view: &str) -> Result<(), PackageNameError> {
	if view.is_empty() {
		return Err(PackageNameError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(PackageNameError::ContainsWhitespace);
	}
	if view.len() > PACKAGE_NAME_MAX_LEN {
		return Err(PackageNameError::TooLong { max: PACKAGE_NAME_MAX_LEN });
	}

	Ok(())
}
