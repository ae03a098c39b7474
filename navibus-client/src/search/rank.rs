//! Ordering of enriched routes for presentation.

use std::cmp::Ordering;

use crate::domain::{EnrichedRoute, Fare};

/// Compare two optional fares, cheapest first.
///
/// Unknown fares compare greater than every known fare, and equal to each
/// other.
fn compare_fares(a: Option<Fare>, b: Option<Fare>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank routes by fare.
///
/// Routes are sorted cheapest first, with routes whose fare is unknown
/// placed after all priced routes. The sort is stable: routes with equal
/// fares (or both unknown) keep the order the search backend returned.
pub(super) fn rank_by_fare(mut routes: Vec<EnrichedRoute>) -> Vec<EnrichedRoute> {
    routes.sort_by(|a, b| compare_fares(a.fare, b.fare));
    routes
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{RouteCandidate, RouteNumber};
    use proptest::prelude::*;

    /// Routes numbered by input position, with an optional fare.
    fn routes_strategy() -> impl Strategy<Value = Vec<EnrichedRoute>> {
        prop::collection::vec(prop::option::of(0u32..500), 0..20).prop_map(|fares| {
            fares
                .into_iter()
                .enumerate()
                .map(|(i, fare)| {
                    EnrichedRoute::new(
                        RouteCandidate::new(RouteNumber::new(i.to_string()), Vec::new()),
                        fare.and_then(|f| Fare::new(f64::from(f))),
                    )
                })
                .collect()
        })
    }

    fn position(route: &EnrichedRoute) -> usize {
        route.route_number().as_str().parse().unwrap()
    }

    proptest! {
        /// Ranking never adds or drops routes
        #[test]
        fn preserves_routes(routes in routes_strategy()) {
            let mut before: Vec<usize> = routes.iter().map(position).collect();
            let mut after: Vec<usize> = rank_by_fare(routes).iter().map(position).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        /// Known fares come first, in ascending order
        #[test]
        fn known_fares_ascending_then_unknown(routes in routes_strategy()) {
            let ranked = rank_by_fare(routes);
            let known = ranked.iter().take_while(|r| r.fare.is_some()).count();
            prop_assert!(ranked[known..].iter().all(|r| r.fare.is_none()));
            for pair in ranked[..known].windows(2) {
                prop_assert!(pair[0].fare <= pair[1].fare);
            }
        }

        /// Routes with equal fares keep their input order
        #[test]
        fn stable_order(routes in routes_strategy()) {
            let ranked = rank_by_fare(routes);
            for pair in ranked.windows(2) {
                if compare_fares(pair[0].fare, pair[1].fare) == Ordering::Equal {
                    prop_assert!(position(&pair[0]) < position(&pair[1]));
                }
            }
        }
    }
}
