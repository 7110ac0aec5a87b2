// Compdoc test infrastructure
//
// Every test parses inline source with the real TSX grammar and inspects the
// resulting trees, descriptors and documentation records.

pub mod helpers;

// ============================================================================
// TREE UTILITIES - parsing, scopes, docblocks, names
// ============================================================================
pub mod ast;

pub mod keys;
pub mod members;

// ============================================================================
// CLASSIFICATION - component and builtin-call detection
// ============================================================================
pub mod classify;

// ============================================================================
// TYPES - Flow and TypeScript annotation descriptors
// ============================================================================
pub mod flow_types;

// ============================================================================
// DOCUMENTATION - prop types, handlers, finders, configuration
// ============================================================================
pub mod config;
pub mod docs;
pub mod prop_types;
