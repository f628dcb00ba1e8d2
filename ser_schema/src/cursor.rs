use crate::{DecodeOptions, Error, Result, TrailingBytes};

/// Single-pass read position over an immutable byte buffer.
///
/// Every decoder takes the bytes it owns from the front of the cursor and
/// leaves the rest for the next one. There is no seeking backward.
#[derive(Debug)]
pub struct Cursor<'a> {
	buf: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create new [`Cursor`] positioned at start of `buf`.
	#[inline]
	pub fn new(buf: &'a [u8]) -> Self {
		Self { buf, pos: 0 }
	}

	/// Take next `n` bytes and advance past them.
	///
	/// Fails with [`Error::Underflow`] if fewer than `n` bytes remain,
	/// in which case position is unchanged.
	#[inline]
	pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
		let remaining = self.remaining();
		if n > remaining {
			return Err(Error::Underflow {
				needed: n,
				remaining,
			});
		}

		let bytes = &self.buf[self.pos..self.pos + n];
		self.pos += n;
		Ok(bytes)
	}

	/// Take next `N` bytes as a fixed-size array.
	#[inline]
	pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut out = [0; N];
		out.copy_from_slice(self.take(N)?);
		Ok(out)
	}

	/// Take a single byte.
	#[inline]
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.take(1)?[0])
	}

	/// Number of bytes not yet consumed.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.buf.len() - self.pos
	}

	/// Number of bytes consumed so far.
	#[inline]
	pub fn position(&self) -> usize {
		self.pos
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// End decoding of a top-level value, applying trailing bytes policy.
	pub fn finish(self, options: &DecodeOptions) -> Result<()> {
		let remaining = self.remaining();
		if remaining > 0 && options.trailing_bytes == TrailingBytes::Reject {
			log::debug!(
				"rejecting {} trailing bytes after {} consumed",
				remaining,
				self.pos
			);
			return Err(Error::TrailingBytes(remaining));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn take_advances() {
		let mut cursor = Cursor::new(&[1, 2, 3, 4]);
		assert_eq!(cursor.take(1).unwrap(), &[1]);
		assert_eq!(cursor.take(2).unwrap(), &[2, 3]);
		assert_eq!(cursor.position(), 3);
		assert_eq!(cursor.remaining(), 1);
		assert_eq!(cursor.take_array::<1>().unwrap(), [4]);
		assert!(cursor.is_empty());
	}

	#[test]
	fn take_zero_from_empty() {
		let mut cursor = Cursor::new(&[]);
		assert_eq!(cursor.take(0).unwrap(), &[] as &[u8]);
	}

	#[test]
	fn underflow_leaves_position() {
		let mut cursor = Cursor::new(&[1, 2]);
		cursor.read_u8().unwrap();
		assert_eq!(
			cursor.take(2),
			Err(Error::Underflow {
				needed: 2,
				remaining: 1
			})
		);
		assert_eq!(cursor.position(), 1);
		assert_eq!(cursor.read_u8().unwrap(), 2);
		assert!(cursor.read_u8().is_err());
	}

	#[test]
	fn finish_policy() {
		let mut cursor = Cursor::new(&[1, 2]);
		cursor.read_u8().unwrap();
		assert_eq!(
			cursor.finish(&DecodeOptions::default()),
			Err(Error::TrailingBytes(1))
		);

		let cursor = Cursor::new(&[1, 2]);
		assert!(cursor.finish(&DecodeOptions::lenient()).is_ok());

		let mut cursor = Cursor::new(&[1]);
		cursor.read_u8().unwrap();
		assert!(cursor.finish(&DecodeOptions::strict()).is_ok());
	}
}
