/*!
 * Validation module for document content.
 *
 * This module provides the checks that run before a document is rendered:
 * - Word counts against the locale's ceilings
 * - Required fields and external mentor consistency
 * - Advisory warnings (email shape, dangling institution references)
 *
 * # Architecture
 *
 * - `word_limit`: Word counting and ceiling checks
 * - `fields`: Export precondition gate and advisory field checks
 */

pub mod word_limit;
pub mod fields;

// Re-export main types
pub use word_limit::{count_words, is_within_limit, WordLimitReport};
pub use fields::{collect_warnings, is_valid_email, validate_for_export, FieldWarning};
