use rand::seq::{index, SliceRandom};
use rand::Rng;

use vocab_core::model::Word;
use vocab_core::CHOICE_COUNT;

/// Build the answer options for `word`: its own meaning plus up to
/// `CHOICE_COUNT - 1` distractor meanings drawn uniformly at random without
/// replacement from the *other* words in `pool`, then shuffled.
///
/// Distractors come from the whole pool, consumed words included, so a
/// meaning may reappear as a distractor on a later question. A pool with
/// fewer than `CHOICE_COUNT` words yields a proportionally smaller set;
/// catalog validation keeps the built-in tiers above that floor.
pub fn generate_choices<R: Rng + ?Sized>(word: &Word, pool: &[Word], rng: &mut R) -> Vec<String> {
    let others: Vec<&Word> = pool.iter().filter(|w| w.id() != word.id()).collect();
    let take = (CHOICE_COUNT - 1).min(others.len());

    let mut choices = Vec::with_capacity(take + 1);
    choices.push(word.meaning().to_string());
    for i in index::sample(rng, others.len(), take) {
        choices.push(others[i].meaning().to_string());
    }

    choices.as_mut_slice().shuffle(rng);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vocab_core::model::WordId;

    fn word(id: u64) -> Word {
        Word::new(WordId::new(id), format!("term-{id}"), format!("meaning {id}")).unwrap()
    }

    fn pool(len: u64) -> Vec<Word> {
        (1..=len).map(word).collect()
    }

    #[test]
    fn includes_correct_meaning_exactly_once() {
        let pool = pool(10);
        let mut rng = StdRng::seed_from_u64(7);

        for target in &pool {
            let choices = generate_choices(target, &pool, &mut rng);
            let hits = choices.iter().filter(|c| *c == target.meaning()).count();
            assert_eq!(hits, 1, "meaning of {} should appear once", target.term());
        }
    }

    #[test]
    fn produces_four_distinct_choices_for_full_pool() {
        let pool = pool(10);
        let mut rng = StdRng::seed_from_u64(1);

        let choices = generate_choices(&pool[0], &pool, &mut rng);
        assert_eq!(choices.len(), CHOICE_COUNT);

        let mut deduped = choices.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), CHOICE_COUNT, "distractors are drawn without replacement");
    }

    #[test]
    fn distractors_come_from_other_words() {
        let pool = pool(10);
        let mut rng = StdRng::seed_from_u64(42);
        let meanings: Vec<&str> = pool.iter().map(Word::meaning).collect();

        for _ in 0..20 {
            let choices = generate_choices(&pool[3], &pool, &mut rng);
            for choice in &choices {
                assert!(meanings.contains(&choice.as_str()));
            }
        }
    }

    #[test]
    fn small_pool_shrinks_choice_set() {
        let pool = pool(2);
        let mut rng = StdRng::seed_from_u64(5);

        let choices = generate_choices(&pool[0], &pool, &mut rng);
        assert_eq!(choices.len(), 2);
        assert!(choices.contains(&pool[0].meaning().to_string()));
    }

    #[test]
    fn single_word_pool_yields_only_the_correct_meaning() {
        let pool = pool(1);
        let mut rng = StdRng::seed_from_u64(5);

        let choices = generate_choices(&pool[0], &pool, &mut rng);
        assert_eq!(choices, vec![pool[0].meaning().to_string()]);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let pool = pool(10);

        let a = generate_choices(&pool[0], &pool, &mut StdRng::seed_from_u64(9));
        let b = generate_choices(&pool[0], &pool, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
