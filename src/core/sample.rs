use rand::seq::SliceRandom;
use rand::Rng;

/// 不重複隨機抽樣，結果為隨機順序
pub fn sample<T>(collection: &[T], count: usize) -> Vec<&T> {
    sample_with_rng(collection, count, &mut rand::thread_rng())
}

/// Fisher-Yates 洗牌後截斷；只洗參考，不動原集合
pub fn sample_with_rng<'a, T, R>(collection: &'a [T], count: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    if count == 0 || collection.is_empty() {
        return Vec::new();
    }

    let mut picked: Vec<&T> = collection.iter().collect();
    let take = count.min(picked.len());
    let (chosen, _) = picked.partial_shuffle(rng, take);
    chosen.to_vec()
}
