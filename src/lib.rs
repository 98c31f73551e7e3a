//! A parser for the RESTCONF `fields` query parameter (RFC 8040 section
//! 4.8.3), producing a depth-ordered list of qualified-name sets suitable for
//! pruning a response document to the requested sub-fields.
//!
//! Every node identifier in the expression is validated against a live schema
//! tree while parsing: an unprefixed identifier inherits the namespace of the
//! schema node it is selected under, a prefixed one resolves its prefix
//! through a [`SchemaContext`]. The tree-shaped selection is then flattened
//! breadth first, so selections reaching the same depth through different
//! ancestors merge into one level group.
//!
//! ```
//! use restconf_fields::{
//!     DataNode, FieldsError, FieldsParser, QName, QNameModule, StaticSchemaContext,
//! };
//!
//! fn main() -> Result<(), FieldsError> {
//!     let module =
//!         QNameModule::with_revision("http://example.com/ns/example-jukebox", "2015-04-04");
//!     let jukebox = DataNode::container(QName::new(module.clone(), "jukebox")).with_child(
//!         DataNode::container(QName::new(module.clone(), "library"))
//!             .with_child(DataNode::list(QName::new(module.clone(), "album"))),
//!     );
//!
//!     let context = StaticSchemaContext::new();
//!     let levels = FieldsParser::new(&context).parse(&jukebox, "library/album")?;
//!
//!     assert_eq!(levels.len(), 2);
//!     assert!(levels[0].contains(&QName::new(module.clone(), "library")));
//!     assert!(levels[1].contains(&QName::new(module, "album")));
//!     Ok(())
//! }
//! ```
//!
//! A malformed expression, or one naming a node the schema does not have,
//! fails with a [`FieldsError`] carrying the RESTCONF error triple
//! (`protocol`, `invalid-value`, HTTP 400) and a diagnostic message with the
//! byte offset of the violation.
pub mod counter;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod qname;
pub mod schema;
pub mod token;

pub use counter::MessageCounter;
pub use errors::ErrorTag;
pub use errors::ErrorType;
pub use errors::FieldsError;
pub use parser::FieldsParser;
pub use qname::QName;
pub use qname::QNameModule;
pub use schema::DataNode;
pub use schema::NodeKind;
pub use schema::SchemaContext;
pub use schema::SchemaNode;
pub use schema::StaticSchemaContext;
