//! XML parsing and canonical serialization for configuration documents.
//!
//! Document format:
//!
//! ```xml
//! <DATA>
//!     <Element Name="main:config">
//!         <Group ID="limits">
//!             <Property ID="maxSpeed" DataType="INT" Value="100"/>
//!             <Group ID="advanced">...</Group>
//!         </Group>
//!     </Element>
//! </DATA>
//! ```
//!
//! `parse` and `render` form a round-trip pair: re-parsing rendered output
//! yields a structurally equal tree. Rendered output is canonical — stable
//! indentation, stable attribute order, CRLF line terminators — so
//! downstream consumers of exported files always see the same bytes for
//! the same tree.

mod format;
mod parser;


// Re-export public API
pub use format::render;
pub use parser::parse;
