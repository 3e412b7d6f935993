//! Classification of types that can never hold `null`.

use null_mark_core::Node;

/// Returns true if `ty` is a `void` or primitive scalar type.
///
/// The type node must have exactly one child, the primitive keyword. An
/// array of primitives such as `int[]` carries extra dimension structure and
/// is a reference type, so it is not classified as non-null. An absent type
/// is never non-null.
#[must_use]
pub fn is_intrinsically_non_null(ty: Option<Node<'_>>) -> bool {
    ty.is_some_and(|ty| {
        ty.child_count() == 1
            && ty
                .first_child()
                .is_some_and(|keyword| keyword.kind().is_primitive())
    })
}
