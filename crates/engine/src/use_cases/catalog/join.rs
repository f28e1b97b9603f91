//! Episode join - attaches the owning episode to child records, and gathers
//! the child records of each episode.

use folgen_domain::{
    CityStory, Episode, EpisodeChild, EpisodeDetails, EpisodeId, MathFact, WithEpisode,
};

/// Join every child record with the episode it references.
///
/// The output has the same length and order as `children`. Each record gets
/// the first episode whose id equals its reference, or `None` when the
/// reference is absent or matches nothing. Collections are small and static,
/// so this is a linear scan per record.
pub fn resolve_with_episode<T>(children: &[T], episodes: &[Episode]) -> Vec<WithEpisode<T>>
where
    T: EpisodeChild + Clone,
{
    children
        .iter()
        .map(|child| {
            let episode = child
                .episode_id()
                .and_then(|id| find_episode(episodes, id))
                .cloned();

            if episode.is_none() {
                tracing::debug!(
                    collection = T::COLLECTION,
                    episode_id = ?child.episode_id().map(EpisodeId::as_str),
                    "Child record has no matching episode"
                );
            }

            WithEpisode::new(child.clone(), episode)
        })
        .collect()
}

/// Every episode with the city-stories and math-facts that reference it.
///
/// Output follows episode order; children keep their collection order. Records
/// without a matching episode appear nowhere.
pub fn collect_episode_details(
    episodes: &[Episode],
    city_stories: &[CityStory],
    math_facts: &[MathFact],
) -> Vec<EpisodeDetails> {
    episodes
        .iter()
        .map(|episode| {
            EpisodeDetails::new(
                episode.clone(),
                children_of(city_stories, &episode.id),
                children_of(math_facts, &episode.id),
            )
        })
        .collect()
}

/// The records of `children` that reference `id`, in order.
pub fn children_of<T: EpisodeChild + Clone>(children: &[T], id: &EpisodeId) -> Vec<T> {
    children
        .iter()
        .filter(|child| child.belongs_to(id))
        .cloned()
        .collect()
}

/// First episode with the given id.
pub fn find_episode<'a>(episodes: &'a [Episode], id: &EpisodeId) -> Option<&'a Episode> {
    episodes.iter().find(|episode| &episode.id == id)
}
