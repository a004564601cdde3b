use dyn_array::ArrayList;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg_attr(test, test)]
fn main() {
    let mut list: ArrayList<i32> = [1, 1, 1, 1, 2, 8, 5, 4].into_iter().collect();
    println!("unsorted:   {list}");

    let last = list.len() - 1;
    list.sort(0, last).unwrap();
    println!("ascending:  {list}");

    // A seeded generator makes the pivot choices, and so the comparison count, repeatable.
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut comparisons = 0;
    list.sort_by_with_rng(0, last, &mut rng, |a, b| {
        comparisons += 1;
        b.cmp(a)
    })
    .unwrap();
    println!("descending: {list} ({comparisons} comparisons)");

    assert_eq!(list, [8, 5, 4, 2, 1, 1, 1, 1]);
}
