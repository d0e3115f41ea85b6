use crate::Action;
use std::cmp::Ordering;
use std::collections::HashSet;

fn sort_key(action: &Action) -> (usize, i32, Vec<u8>) {
    (
        action.len(),
        action.pattern().main_value(),
        action.ranks().iter().map(|rank| rank.value()).collect(),
    )
}

pub fn compare_actions(a: &Action, b: &Action) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

pub fn sort_unique<I>(actions: I) -> Vec<Action>
where
    I: IntoIterator<Item = Action>,
{
    let mut seen = HashSet::new();
    let mut unique: Vec<Action> = actions
        .into_iter()
        .filter(|action| seen.insert(action.clone()))
        .collect();
    unique.sort_by_cached_key(sort_key);
    unique
}
