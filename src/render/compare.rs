//! Pairwise comparison rendering and friends.
//!
//! `compare_render!` walks an argument sequence, evaluates a binary predicate
//! on every adjacent pair and appends one line per pair:
//!
//! ```text
//! Comparing: LHS: <render(a)> and RHS: <render(b)> Produces: <verdict>
//! ```
//!
//! Fewer than two arguments produce no output. The predicate must accept
//! references to every adjacent type pair and yield a value convertible to
//! `bool`; an uncallable pair is a compile error. The predicate expression is
//! expanded once per pair, so a generic fn path infers fresh type parameters
//! for heterogeneous sequences.

use alloc::string::String;

/// Append one comparison line to `out`.
pub fn write_comparison(out: &mut String, lhs: &str, rhs: &str, verdict: bool) {
    out.push_str("Comparing: LHS: ");
    out.push_str(lhs);
    out.push_str(" and RHS: ");
    out.push_str(rhs);
    out.push_str(" Produces: ");
    out.push_str(if verdict { "true" } else { "false" });
    out.push('\n');
}

/// Render every adjacent pair of a value sequence through a binary predicate.
///
/// For a sequence of length L this appends exactly `max(L - 1, 0)` lines to
/// `out` (a `&mut String`). Each value expression is evaluated exactly once.
///
/// # Usage
///
/// ```
/// use typeview::compare_render;
///
/// let mut out = String::new();
/// compare_render!(&mut out, |a: &i32, b: &i32| a < b, 1, 2);
/// assert_eq!(out, "Comparing: LHS: 1 and RHS: 2 Produces: true\n");
/// ```
#[macro_export]
macro_rules! compare_render {
    ($out:expr, $op:expr $(, $arg:expr)* $(,)?) => {
        $crate::__compare_bind!(($out), ($op), [] $(, $arg)*);
    };
}

/// Bind each argument exactly once, then hand the borrows to the emitter.
#[doc(hidden)]
#[macro_export]
macro_rules! __compare_bind {
    (($out:expr), ($op:expr), [$($bound:ident)*]) => {
        $crate::__compare_emit!(($out), ($op) $($bound)*);
    };
    (($out:expr), ($op:expr), [$($bound:ident)*], $head:expr $(, $tail:expr)*) => {
        match &$head {
            __arg => {
                $crate::__compare_bind!(($out), ($op), [$($bound)* __arg] $(, $tail)*);
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __compare_emit {
    (($out:expr), ($op:expr)) => {};
    (($out:expr), ($op:expr) $only:ident) => {
        let _ = $only;
    };
    (($out:expr), ($op:expr) $a:ident $b:ident $($rest:ident)*) => {
        $crate::render::compare::write_comparison(
            $out,
            &$crate::render!(*$a),
            &$crate::render!(*$b),
            ::core::convert::Into::into($op($a, $b)),
        );
        $crate::__compare_emit!(($out), ($op) $b $($rest)*);
    };
}

/// The two-argument comparison render: check a binary predicate over a pair
/// and append the comparison line.
///
/// # Usage
///
/// ```
/// use typeview::debug_check;
///
/// let mut out = String::new();
/// debug_check!(&mut out, |a: &u8, b: &u8| a == b, 3u8, 4u8);
/// assert_eq!(out, "Comparing: LHS: 3 and RHS: 4 Produces: false\n");
/// ```
#[macro_export]
macro_rules! debug_check {
    ($out:expr, $op:expr, $a:expr, $b:expr $(,)?) => {
        $crate::compare_render!($out, $op, $a, $b);
    };
}

/// Append the renders of all arguments to `out`, separated by `delim`.
///
/// No trailing delimiter; no output for an empty sequence.
///
/// # Usage
///
/// ```
/// use typeview::render_joined;
///
/// let mut out = String::new();
/// render_joined!(&mut out, ", ", 1, "two", 3.5);
/// assert_eq!(out, "1, two, 3.5");
/// ```
#[macro_export]
macro_rules! render_joined {
    ($out:expr, $delim:expr $(,)?) => {};
    ($out:expr, $delim:expr, $first:expr $(, $rest:expr)* $(,)?) => {
        match (&mut *$out, &$delim) {
            (__out, __delim) => {
                __out.push_str(&$crate::render!($first));
                $(
                    __out.push_str(__delim);
                    __out.push_str(&$crate::render!($rest));
                )*
            }
        }
    };
}

/// Render each argument and collect the results into a tuple of `String`s.
///
/// # Usage
///
/// ```
/// use typeview::render_tuple;
///
/// let (a, b) = render_tuple!(255i32, "abc");
/// assert_eq!(a, "255");
/// assert_eq!(b, "abc");
/// ```
#[macro_export]
macro_rules! render_tuple {
    ($($arg:expr),* $(,)?) => {
        ($($crate::render!($arg),)*)
    };
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    #[test]
    fn line_template() {
        let mut out = String::new();
        super::write_comparison(&mut out, "1", "2", true);
        assert_eq!(out, "Comparing: LHS: 1 and RHS: 2 Produces: true\n");
    }

    #[test]
    fn short_sequences_write_nothing() {
        let mut out = String::new();
        compare_render!(&mut out, |a: &i32, b: &i32| a < b);
        compare_render!(&mut out, |a: &i32, b: &i32| a < b, 7);
        assert!(out.is_empty());
    }
}
