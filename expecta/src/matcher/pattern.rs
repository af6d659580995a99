//! Patterns for the complete argument tuple of a call.

use std::fmt::{Formatter, Result as FmtResult};

use super::{Describe, Matcher};

/// Pattern of an operation without arguments.
pub fn no_args() -> NoArgs {
    NoArgs
}

/// Combines one matcher per argument position into the pattern of a call.
///
/// A single matcher is used for operations with exactly one argument, a
/// tuple of matchers for operations with more arguments. The call matches
/// only if every position matches.
pub fn multi<T>(matchers: T) -> Multi<T> {
    Multi(matchers)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct NoArgs;

impl Matcher<()> for NoArgs {
    fn matches(&self, (): &()) -> bool {
        true
    }

    fn fmt(&self, _f: &mut Formatter<'_>) -> FmtResult {
        Ok(())
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Multi<T>(T);

impl<T, M> Matcher<T> for Multi<M>
where
    M: Positions<T>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.all_match(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.describe(f)
    }
}

/// Matchers for the positions of an argument tuple `T`.
pub trait Positions<T> {
    /// Returns `true` if every position matches.
    fn all_match(&self, args: &T) -> bool;

    /// Write the position matchers separated by commas.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/* one argument: the bare matcher */
impl<T, M> Positions<T> for M
where
    M: Matcher<T>,
{
    fn all_match(&self, args: &T) -> bool {
        self.matches(args)
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(self, f)
    }
}

macro_rules! impl_positions {
    ($first:tt: $first_arg:ident => $first_matcher:ident $(, $idx:tt: $arg:ident => $matcher:ident)+) => {
        impl<$first_arg, $first_matcher $(, $arg, $matcher)+> Positions<($first_arg $(, $arg)+)>
            for ($first_matcher $(, $matcher)+)
        where
            $first_matcher: Matcher<$first_arg>,
            $( $matcher: Matcher<$arg>, )+
        {
            fn all_match(&self, args: &($first_arg $(, $arg)+)) -> bool {
                self.$first.matches(&args.$first) $( && self.$idx.matches(&args.$idx) )+
            }

            fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "{}", Describe::<$first_arg>(&self.$first))?;
                $( write!(f, ", {}", Describe::<$arg>(&self.$idx))?; )+

                Ok(())
            }
        }
    };
}

impl_positions!(0: A0 => M0, 1: A1 => M1);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2, 3: A3 => M3);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2, 3: A3 => M3, 4: A4 => M4);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2, 3: A3 => M3, 4: A4 => M4, 5: A5 => M5);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2, 3: A3 => M3, 4: A4 => M4, 5: A5 => M5, 6: A6 => M6);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2, 3: A3 => M3, 4: A4 => M4, 5: A5 => M5, 6: A6 => M6, 7: A7 => M7);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2, 3: A3 => M3, 4: A4 => M4, 5: A5 => M5, 6: A6 => M6, 7: A7 => M7, 8: A8 => M8);
impl_positions!(0: A0 => M0, 1: A1 => M1, 2: A2 => M2, 3: A3 => M3, 4: A4 => M4, 5: A5 => M5, 6: A6 => M6, 7: A7 => M7, 8: A8 => M8, 9: A9 => M9);
