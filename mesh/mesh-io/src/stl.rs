//! STL (Stereolithography) parsing.
//!
//! Both encodings are read into a [`TriangleMesh`], one triangle per facet,
//! in file order. Stored facet normals are skipped: orientation comes from
//! vertex order alone.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored, may itself start with "solid")
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! A binary file is structurally valid only if `84 + count * 50` equals its
//! length exactly.
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Parsing is token based: any whitespace separates tokens and keywords are
//! case-insensitive. A solid name is the rest of its `solid` or `endsolid`
//! line, so names may contain keywords. Consecutive `solid` blocks are read
//! into one mesh.
//!
//! Only the grammar has to be ASCII. A leading UTF-8 byte order mark is
//! skipped and non-UTF-8 bytes in names (Latin-1 exporters) are tolerated.
//!
//! # Encoding Detection
//!
//! Detection validates structure before parsing anything:
//!
//! | binary length check | NUL-free, starts with `solid` | action |
//! |---|---|---|
//! | consistent | no | binary |
//! | consistent | yes | ASCII, then binary if ASCII fails |
//! | inconsistent / too short | yes | ASCII |
//! | inconsistent | no, and not text | `MalformedFile` |
//! | anything else | | `UnsupportedEncoding` |

use std::io::Read;
use std::path::Path;
use std::str::{Lines, SplitAsciiWhitespace};

use mesh_types::{Point3, Triangle, TriangleMesh};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Header plus the little-endian triangle count.
const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Offset of the first vertex inside a binary triangle record.
const VERTEX_OFFSET: usize = 12;

/// Size of one binary vertex (3 × f32).
const VERTEX_SIZE: usize = 12;

/// UTF-8 byte order mark some editors prepend to text files.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The two STL encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlEncoding {
    /// Fixed-size little-endian records.
    Binary,
    /// Keyword-delimited text.
    Ascii,
}

impl StlEncoding {
    /// Human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Ascii => "ASCII",
        }
    }
}

/// Outcome of checking the binary length invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryLayout {
    /// `84 + count * 50 == len`.
    Consistent { count: usize },
    /// Header present but the declared count disagrees with the length.
    Inconsistent { declared: u32, expected_len: u64 },
    /// Shorter than the 84-byte preamble.
    TooShort,
}

/// What the buffer looks like as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Content {
    /// No NUL bytes, and the first token after an optional BOM is `solid`.
    AsciiStl,
    /// UTF-8 without NUL bytes, but not an STL solid.
    OtherText,
    /// Not text.
    Bytes,
}

/// The parse strategy chosen for a buffer.
#[derive(Debug, Clone, Copy)]
enum Plan {
    Ascii,
    AsciiThenBinary(usize),
    Binary(usize),
    CountMismatch { declared: u32, expected_len: u64 },
    Unrecognized,
}

fn binary_layout(bytes: &[u8]) -> BinaryLayout {
    let Some(count_bytes) = bytes.get(HEADER_SIZE..PREAMBLE_SIZE) else {
        return BinaryLayout::TooShort;
    };
    let declared = u32::from_le_bytes([
        count_bytes[0],
        count_bytes[1],
        count_bytes[2],
        count_bytes[3],
    ]);

    // u64 cannot overflow here: u32::MAX * 50 + 84 < 2^38
    let expected_len = u64::from(declared) * TRIANGLE_SIZE as u64 + PREAMBLE_SIZE as u64;
    let actual_len = u64::try_from(bytes.len()).unwrap_or(u64::MAX);

    match usize::try_from(declared) {
        Ok(count) if expected_len == actual_len => BinaryLayout::Consistent { count },
        _ => BinaryLayout::Inconsistent {
            declared,
            expected_len,
        },
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Whether the first token, after an optional BOM, is `solid`.
fn starts_with_solid(bytes: &[u8]) -> bool {
    let text = strip_bom(bytes).trim_ascii_start();
    let keyword = text
        .get(..5)
        .is_some_and(|word| word.eq_ignore_ascii_case(b"solid"));
    keyword && !matches!(text.get(5), Some(b) if !b.is_ascii_whitespace())
}

fn classify_content(bytes: &[u8]) -> Content {
    if bytes.contains(&0) {
        Content::Bytes
    } else if starts_with_solid(bytes) {
        Content::AsciiStl
    } else if std::str::from_utf8(bytes).is_ok() {
        Content::OtherText
    } else {
        Content::Bytes
    }
}

fn plan(bytes: &[u8]) -> Plan {
    match (classify_content(bytes), binary_layout(bytes)) {
        (Content::AsciiStl, BinaryLayout::Consistent { count }) => Plan::AsciiThenBinary(count),
        (Content::AsciiStl, _) => Plan::Ascii,
        (_, BinaryLayout::Consistent { count }) => Plan::Binary(count),
        (
            Content::Bytes,
            BinaryLayout::Inconsistent {
                declared,
                expected_len,
            },
        ) => Plan::CountMismatch {
            declared,
            expected_len,
        },
        _ => Plan::Unrecognized,
    }
}

/// Detect which STL encoding a buffer uses, without parsing it.
///
/// Returns `None` when neither layout is recognized. A binary buffer whose
/// declared triangle count disagrees with its length is still reported as
/// [`StlEncoding::Binary`]; [`parse_stl`] rejects it as malformed.
///
/// # Example
///
/// ```
/// use mesh_io::{detect_encoding, StlEncoding};
///
/// assert_eq!(detect_encoding(b"solid cube\nendsolid cube\n"), Some(StlEncoding::Ascii));
/// assert_eq!(detect_encoding(b"hello"), None);
/// ```
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> Option<StlEncoding> {
    match plan(bytes) {
        Plan::Ascii | Plan::AsciiThenBinary(_) => Some(StlEncoding::Ascii),
        Plan::Binary(_) | Plan::CountMismatch { .. } => Some(StlEncoding::Binary),
        Plan::Unrecognized => None,
    }
}

/// Parse an in-memory STL file (binary or ASCII) into a mesh.
///
/// # Errors
///
/// - [`IoError::MalformedFile`] for a binary count/length mismatch, a
///   truncated or inconsistent ASCII facet, or non-numeric/non-finite
///   coordinates
/// - [`IoError::EmptyMesh`] if the file holds zero facets
/// - [`IoError::UnsupportedEncoding`] if neither encoding is recognized
///
/// # Example
///
/// ```
/// use mesh_io::parse_stl;
///
/// let stl = b"solid t
///   facet normal 0 0 1
///     outer loop
///       vertex 0 0 0
///       vertex 1 0 0
///       vertex 0 1 0
///     endloop
///   endfacet
/// endsolid t";
///
/// let mesh = parse_stl(stl).unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
pub fn parse_stl(bytes: &[u8]) -> IoResult<TriangleMesh> {
    let (encoding, result) = match plan(bytes) {
        Plan::Ascii => (StlEncoding::Ascii, parse_ascii(bytes)),
        Plan::Binary(count) => (StlEncoding::Binary, parse_binary(bytes, count)),
        // Only reachable when the count field has no zero byte, i.e. at
        // least 0x0101_0101 records (an 800 MB+ file). Smaller binaries
        // with a `solid` header always contain a NUL and plan as Binary.
        Plan::AsciiThenBinary(count) => match parse_ascii(bytes) {
            Ok(mesh) => (StlEncoding::Ascii, Ok(mesh)),
            Err(ascii_err) => {
                debug!(error = %ascii_err, "ASCII parse failed, retrying as binary");
                let binary = parse_binary(bytes, count).map_err(|_| ascii_err);
                (StlEncoding::Binary, binary)
            }
        },
        Plan::CountMismatch {
            declared,
            expected_len,
        } => {
            return Err(IoError::malformed(format!(
                "binary header declares {declared} triangles ({expected_len} bytes) \
                 but the file is {} bytes",
                bytes.len()
            )));
        }
        Plan::Unrecognized => return Err(IoError::UnsupportedEncoding),
    };

    let mesh = result?;
    debug!(
        encoding = encoding.as_str(),
        triangles = mesh.triangle_count(),
        "parsed STL"
    );
    Ok(mesh)
}

/// Read an STL file from any reader and parse it.
///
/// The whole stream is buffered first; encoding detection needs the total
/// length.
///
/// # Errors
///
/// Returns [`IoError::Io`] if reading fails, otherwise the errors of
/// [`parse_stl`].
pub fn read_stl<R: Read>(mut reader: R) -> IoResult<TriangleMesh> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_stl(&bytes)
}

/// Load a mesh from an STL file on disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the path does not exist,
/// [`IoError::Io`] for other read failures, otherwise the errors of
/// [`parse_stl`].
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_stl;
///
/// let mesh = load_stl("ring.stl").unwrap();
/// println!("Loaded {} triangles", mesh.triangle_count());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<TriangleMesh> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read STL file");
    parse_stl(&bytes)
}

fn parse_binary(bytes: &[u8], count: usize) -> IoResult<TriangleMesh> {
    if count == 0 {
        return Err(IoError::EmptyMesh);
    }

    let body = bytes.get(PREAMBLE_SIZE..).unwrap_or_default();
    let mut triangles = Vec::with_capacity(count);

    for (index, record) in body.chunks_exact(TRIANGLE_SIZE).enumerate() {
        let corner = |n: usize| {
            let start = VERTEX_OFFSET + n * VERTEX_SIZE;
            read_point(&record[start..start + VERTEX_SIZE])
        };
        let tri = Triangle::new(corner(0), corner(1), corner(2));
        if !tri.is_finite() {
            return Err(IoError::malformed(format!(
                "triangle {index} has a non-finite coordinate"
            )));
        }
        triangles.push(tri);
    }

    TriangleMesh::from_triangles(triangles).ok_or(IoError::EmptyMesh)
}

/// Read a point from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> Point3<f64> {
    let coord = |i: usize| {
        f64::from(f32::from_le_bytes([
            buf[i],
            buf[i + 1],
            buf[i + 2],
            buf[i + 3],
        ]))
    };
    Point3::new(coord(0), coord(4), coord(8))
}

/// Keywords of the ASCII grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Solid,
    EndSolid,
    Facet,
    Normal,
    Outer,
    Loop,
    Vertex,
    EndLoop,
    EndFacet,
}

impl Keyword {
    const TABLE: [(&'static str, Self); 9] = [
        ("solid", Self::Solid),
        ("endsolid", Self::EndSolid),
        ("facet", Self::Facet),
        ("normal", Self::Normal),
        ("outer", Self::Outer),
        ("loop", Self::Loop),
        ("vertex", Self::Vertex),
        ("endloop", Self::EndLoop),
        ("endfacet", Self::EndFacet),
    ];

    fn parse(token: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(name, _)| token.eq_ignore_ascii_case(name))
            .map(|&(_, keyword)| keyword)
    }
}

fn parse_ascii(bytes: &[u8]) -> IoResult<TriangleMesh> {
    // Grammar tokens are ASCII, so a lossy view only ever alters names.
    let text = String::from_utf8_lossy(strip_bom(bytes));
    let mut parser = AsciiParser {
        tokens: Tokens::new(&text),
        triangles: Vec::new(),
    };
    parser.run()?;
    TriangleMesh::from_triangles(parser.triangles).ok_or(IoError::EmptyMesh)
}

/// Whitespace-separated tokens, read line by line.
struct Tokens<'a> {
    lines: Lines<'a>,
    line: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: "".split_ascii_whitespace(),
        }
    }

    /// Drop whatever is left of the current line.
    fn skip_line(&mut self) {
        self.line = "".split_ascii_whitespace();
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(token) = self.line.next() {
                return Some(token);
            }
            self.line = self.lines.next()?.split_ascii_whitespace();
        }
    }
}

struct AsciiParser<'a> {
    tokens: Tokens<'a>,
    triangles: Vec<Triangle>,
}

impl<'a> AsciiParser<'a> {
    fn run(&mut self) -> IoResult<()> {
        while let Some(token) = self.tokens.next() {
            match Keyword::parse(token) {
                // the name is free text up to the end of the line
                Some(Keyword::Solid | Keyword::EndSolid) => self.tokens.skip_line(),
                Some(Keyword::Facet) => self.facet()?,
                Some(Keyword::Vertex) => {
                    return Err(IoError::malformed(format!(
                        "vertex outside a facet after triangle {}",
                        self.triangles.len()
                    )));
                }
                _ => {
                    return Err(IoError::malformed(format!(
                        "unexpected token `{token}` outside a facet"
                    )));
                }
            }
        }
        Ok(())
    }

    fn facet(&mut self) -> IoResult<()> {
        let index = self.triangles.len();
        let mut corners: Vec<Point3<f64>> = Vec::with_capacity(3);

        loop {
            let token = self.next_in_facet(index)?;
            match Keyword::parse(token) {
                Some(Keyword::Normal) => {
                    // stored normals are never trusted
                    for _ in 0..3 {
                        self.next_in_facet(index)?;
                    }
                }
                Some(Keyword::Outer | Keyword::Loop | Keyword::EndLoop) => {}
                Some(Keyword::Vertex) => {
                    let x = self.coordinate(index)?;
                    let y = self.coordinate(index)?;
                    let z = self.coordinate(index)?;
                    corners.push(Point3::new(x, y, z));
                }
                Some(Keyword::EndFacet) => break,
                _ => {
                    return Err(IoError::malformed(format!(
                        "unexpected token `{token}` in facet {index}"
                    )));
                }
            }
        }

        match corners.as_slice() {
            &[a, b, c] => {
                self.triangles.push(Triangle::new(a, b, c));
                Ok(())
            }
            other => Err(IoError::malformed(format!(
                "facet {index} has {} vertices, expected 3",
                other.len()
            ))),
        }
    }

    fn next_in_facet(&mut self, index: usize) -> IoResult<&'a str> {
        self.tokens
            .next()
            .ok_or_else(|| IoError::malformed(format!("input ends inside facet {index}")))
    }

    fn coordinate(&mut self, index: usize) -> IoResult<f64> {
        let token = self.next_in_facet(index)?;
        let value: f64 = token.parse().map_err(|_| {
            IoError::malformed(format!(
                "non-numeric vertex coordinate `{token}` in facet {index}"
            ))
        })?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(IoError::malformed(format!(
                "non-finite vertex coordinate `{token}` in facet {index}"
            )))
        }
    }
}
