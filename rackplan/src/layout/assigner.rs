//! Dot assignment for new trays.
//!
//! The assigner drops a new tray into the middle of the largest free
//! interval between existing trays. The interval below the lowest tray is
//! bounded by a virtual dot 0. Space above the topmost tray is only used
//! through the fallback, when no interior interval has a usable midpoint:
//! a rack filled bottom-up keeps growing upward, while any hole inside the
//! stack is filled first.

use crate::profile::DotPosition;
use crate::rack::Tray;

/// Stateless tray position assigner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrayPositionAssigner;

impl TrayPositionAssigner {
    /// Choose a dot for a new tray given the trays already on the rack.
    ///
    /// The result is not range-checked; see
    /// [`TrayPositionAssigner::assign_from_dots`].
    #[must_use]
    pub fn assign_position(existing: &[Tray]) -> DotPosition {
        Self::assign_from_dots(existing.iter().map(Tray::dot_position))
    }

    /// Choose a dot for a new tray given the occupied dots.
    ///
    /// This implements the largest-gap algorithm:
    /// 1. An empty rack gets dot 1
    /// 2. Dots are sorted ascending, with a virtual lower bound of 0
    /// 3. The first largest gap between consecutive dots wins ties
    /// 4. The midpoint of that gap (integer division) is returned
    /// 5. A midpoint of 0 falls back to the topmost dot + 1
    ///
    /// The result may lie above the rack; callers range-check it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{DotPosition, TrayPositionAssigner};
    ///
    /// let dots = [5, 20].map(|d| DotPosition::try_from(d).unwrap());
    /// assert_eq!(TrayPositionAssigner::assign_from_dots(dots).value(), 12);
    ///
    /// let single = [DotPosition::FIRST];
    /// assert_eq!(TrayPositionAssigner::assign_from_dots(single).value(), 2);
    ///
    /// assert_eq!(TrayPositionAssigner::assign_from_dots([]).value(), 1);
    /// ```
    #[must_use]
    pub fn assign_from_dots<I>(dots: I) -> DotPosition
    where
        I: IntoIterator<Item = DotPosition>,
    {
        let mut sorted: Vec<u16> = dots.into_iter().map(DotPosition::value).collect();
        sorted.sort_unstable();

        let Some(&highest) = sorted.last() else {
            return DotPosition::FIRST;
        };

        let mut lower = 0u16;
        let mut best_gap = 0u16;
        let mut midpoint = 0u16;

        for &upper in &sorted {
            let gap = upper - lower;
            if gap > best_gap {
                best_gap = gap;
                midpoint = lower + gap / 2;
            }
            lower = upper;
        }

        let assigned = if midpoint == 0 {
            highest.saturating_add(1)
        } else {
            midpoint
        };

        log::debug!(
            "assigned dot {assigned} (largest gap {best_gap}, {} tray(s) on rack)",
            sorted.len()
        );

        DotPosition::from_nonzero(assigned)
    }

    /// Sort trays by dot and assign dense display indices `1..=N`.
    ///
    /// Only `display_order` changes; dot positions are physical coordinates
    /// and are never rewritten here.
    pub fn renumber_for_display(trays: &mut [Tray]) {
        trays.sort_by_key(Tray::dot_position);
        for (index, tray) in trays.iter_mut().enumerate() {
            tray.set_display_order(index + 1);
        }
    }
}
