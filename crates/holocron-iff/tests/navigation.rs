use holocron_common::ErrorKind;
use holocron_iff::{Error, Iff};

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
fn reenter_after_exit_restores_cursor() {
    let data = form(
        b"OUTR",
        &[form(b"INNR", &[chunk(b"DATA", &7u32.to_le_bytes())])],
    );
    let iff = Iff::parse(&data).unwrap();
    let mut reader = iff.reader();

    reader.enter_form("OUTR").unwrap();
    reader.enter_form("INNR").unwrap();
    assert_eq!(reader.depth(), 2);
    reader.exit_form();
    assert_eq!(reader.depth(), 1);

    reader.enter_form("INNR").unwrap();
    reader.enter_chunk("DATA").unwrap();
    assert_eq!(reader.chunk_reader().unwrap().read_u32().unwrap(), 7);
    reader.exit_chunk();
    reader.exit_form();
    reader.exit_form();

    assert_eq!(reader.depth(), 0);
    assert!(reader.has_form("OUTR"));
}

#[test]
fn missing_form_names_the_request() {
    let data = form(b"OUTR", &[]);
    let iff = Iff::parse(&data).unwrap();
    let mut reader = iff.reader();

    let err = reader.enter_form("NOPE").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(&err, Error::FormNotFound { name, .. } if name == "NOPE"));
    assert!(err.to_string().contains("NOPE"));

    // A failed enter leaves the cursor untouched.
    assert_eq!(reader.depth(), 0);
    reader.enter_form("OUTR").unwrap();
}

#[test]
fn oversized_chunk_is_a_format_error() {
    let mut data = form(b"OUTR", &[chunk(b"DATA", &[1, 2, 3, 4])]);
    // Grow both the form and the chunk beyond the end of the buffer.
    data[7] += 16;
    data[12 + 7] += 16;

    let err = Iff::parse(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn sibling_sizes_stay_in_sync() {
    let data = [
        form(b"ONE ", &[chunk(b"AAAA", &[1; 3]), chunk(b"BBBB", &[])]),
        chunk(b"LOOS", &[9; 5]),
        form(b"TWO ", &[form(b"DEEP", &[chunk(b"CCCC", &[2; 7])])]),
    ]
    .concat();
    let iff = Iff::parse(&data).unwrap();

    let tags: Vec<String> = iff.nodes().iter().map(|n| n.tag().to_string()).collect();
    assert_eq!(tags, ["ONE ", "LOOS", "TWO "]);

    let mut reader = iff.reader();
    reader.enter_form("TWO ").unwrap();
    reader.enter_form("DEEP").unwrap();
    reader.enter_chunk("CCCC").unwrap();
    assert_eq!(reader.chunk_data().unwrap(), &[2; 7]);
}
