/// Next value of the counter.
pub fn add(current: i64) -> i64 {
    current + 1
}
