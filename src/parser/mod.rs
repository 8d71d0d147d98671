//! MHTML parsing: boundary detection, part splitting, header extraction,
//! transfer decoding, and part classification.

pub mod boundary;
pub mod decode;
pub mod header;
pub mod part;
pub mod split;
