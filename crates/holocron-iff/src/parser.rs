//! IFF parser.

use holocron_common::{BinaryReader, Tag};
use log::{debug, trace};

use crate::{Error, IffReader, Node, NodeHeader, Result};

/// Deepest form nesting accepted by [`Iff::parse`].
pub const MAX_DEPTH: usize = 256;

/// A fully parsed IFF container.
///
/// The whole buffer is parsed up front; navigation happens through an
/// [`IffReader`] cursor obtained from [`Iff::reader`].
#[derive(Debug, Clone)]
pub struct Iff<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Iff<'a> {
    /// Check if data starts with a form header.
    pub fn is_iff(data: &[u8]) -> bool {
        data.len() >= NodeHeader::FORM_OVERHEAD && data[..Tag::LEN] == *Tag::FORM.as_bytes()
    }

    /// Parse an IFF container from bytes.
    ///
    /// Top-level nodes are read until the buffer is exhausted. Each form's
    /// children are read from a window of exactly `size - 4` bytes, so a child
    /// that overruns its parent is reported instead of bleeding into the
    /// next sibling.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let nodes = parse_nodes(&mut reader, 0, 0)?;

        debug!(
            "Parsed IFF: {} bytes, {} top-level nodes",
            data.len(),
            nodes.len()
        );

        Ok(Self { nodes })
    }

    /// The top-level nodes.
    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    /// A navigation cursor positioned at the top level.
    pub fn reader(&self) -> IffReader<'_, 'a> {
        IffReader::new(&self.nodes)
    }
}

/// Parse sibling nodes until the reader is exhausted.
///
/// `base` is the absolute offset of the reader's first byte, used only for
/// error reporting.
fn parse_nodes<'a>(
    reader: &mut BinaryReader<'a>,
    base: usize,
    depth: usize,
) -> Result<Vec<Node<'a>>> {
    let mut nodes = Vec::new();
    while !reader.is_empty() {
        nodes.push(parse_node(reader, base, depth)?);
    }
    Ok(nodes)
}

fn parse_node<'a>(reader: &mut BinaryReader<'a>, base: usize, depth: usize) -> Result<Node<'a>> {
    let offset = base + reader.position();

    if reader.remaining() < NodeHeader::SIZE {
        return Err(Error::TruncatedHeader {
            offset,
            available: reader.remaining(),
        });
    }
    let header: NodeHeader = reader.read_struct()?;
    let size = header.size();

    if reader.remaining() < size as usize {
        return Err(Error::Truncated {
            tag: header.tag,
            offset,
            declared: size as usize,
            available: reader.remaining(),
        });
    }
    let mut body = reader.take(size as usize)?;

    if !header.is_form() {
        trace!("chunk {} at {}: {} bytes", header.tag, offset, size);
        return Ok(Node::Chunk {
            tag: header.tag,
            size,
            data: body.remaining_bytes(),
        });
    }

    if (size as usize) < Tag::LEN {
        return Err(Error::FormTooSmall { offset, size });
    }
    if depth >= MAX_DEPTH {
        return Err(Error::TooDeep {
            max: MAX_DEPTH,
            offset,
        });
    }

    let tag = body.read_tag()?;
    trace!("form {} at {}: {} bytes", tag, offset, size);

    // Body positions already count the subtype.
    let children = parse_nodes(&mut body, offset + NodeHeader::SIZE, depth + 1)?;
    Ok(Node::Form {
        tag,
        size,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = tag.to_vec();
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(payload);
        out
    }

    fn form(tag: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
        let body: Vec<u8> = children.concat();
        let mut out = b"FORM".to_vec();
        out.extend_from_slice(&(body.len() as u32 + 4).to_be_bytes());
        out.extend_from_slice(tag);
        out.extend_from_slice(&body);
        out
    }

    #[test]
    fn test_is_iff() {
        assert!(Iff::is_iff(&form(b"TEST", &[])));
        assert!(!Iff::is_iff(b"FORM"));
        assert!(!Iff::is_iff(b"NOTANIFFFILE"));
    }

    #[test]
    fn test_parse_nested() {
        let data = form(
            b"OUTR",
            &[chunk(b"DATA", &[1, 2, 3]), form(b"INNR", &[chunk(b"NAME", b"x\0")])],
        );
        let iff = Iff::parse(&data).unwrap();

        assert_eq!(iff.nodes().len(), 1);
        let outer = &iff.nodes()[0];
        assert!(outer.tag().matches("OUTR"));
        assert_eq!(outer.size() as usize, data.len() - NodeHeader::SIZE);
        assert_eq!(outer.children().len(), 2);
        assert_eq!(outer.children()[0].data(), Some(&[1u8, 2, 3][..]));
        assert!(outer.children()[1].children()[0].tag().matches("NAME"));
    }

    #[test]
    fn test_empty_buffer() {
        let iff = Iff::parse(&[]).unwrap();
        assert!(iff.nodes().is_empty());
    }

    #[test]
    fn test_chunk_overruns_buffer() {
        let mut data = chunk(b"DATA", &[0; 4]);
        data[7] = 200;

        let err = Iff::parse(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                declared: 200,
                available: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_child_overruns_form() {
        // The chunk claims 8 bytes but its form only leaves room for 4.
        let mut data = form(b"OUTR", &[chunk(b"DATA", &[0; 4])]);
        data.extend_from_slice(&[0; 4]);
        data[12 + 7] = 8;

        assert!(matches!(
            Iff::parse(&data),
            Err(Error::Truncated { offset: 12, .. })
        ));
    }

    #[test]
    fn test_partial_header() {
        let mut data = chunk(b"DATA", &[]);
        data.extend_from_slice(b"FOR");

        assert!(matches!(
            Iff::parse(&data),
            Err(Error::TruncatedHeader {
                offset: 8,
                available: 3
            })
        ));
    }

    #[test]
    fn test_form_too_small() {
        let data = [b'F', b'O', b'R', b'M', 0, 0, 0, 2, b'A', b'B'];

        assert!(matches!(
            Iff::parse(&data),
            Err(Error::FormTooSmall { offset: 0, size: 2 })
        ));
    }

    #[test]
    fn test_nested_error_offset() {
        // OUTR at 0, INNR at 12, DATA at 24 claiming more than INNR holds.
        let mut data = form(b"OUTR", &[form(b"INNR", &[chunk(b"DATA", &[0; 4])])]);
        data[24 + 7] = 9;

        assert!(matches!(
            Iff::parse(&data),
            Err(Error::Truncated {
                offset: 24,
                declared: 9,
                available: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut data = form(b"LEAF", &[]);
        for _ in 0..MAX_DEPTH {
            data = form(b"NEST", &[data]);
        }

        assert!(matches!(Iff::parse(&data), Err(Error::TooDeep { .. })));
    }
}
