use slotbuf::{GrowthPolicy, SlotBuffer};

#[cfg_attr(test, test)]
fn main() {
    let policy = GrowthPolicy::with_max_capacity(64);
    let mut buffer = SlotBuffer::with_capacity(2);

    for value in 0..64_u32 {
        if buffer.is_full() {
            let capacity = policy
                .grown_capacity(buffer.capacity(), buffer.len() + 1)
                .unwrap();
            println!("{} -> {capacity}", buffer.capacity());
            buffer.try_regrow(capacity).unwrap();
        }
        buffer.try_push(value).unwrap();
    }

    assert_eq!(buffer.len(), 64);
    let error = policy.grown_capacity(buffer.capacity(), 65).unwrap_err();
    println!("{error}");
}
