use super::*;

#[test]
fn test_closure_observer() {
    let mut seen = Vec::new();
    {
        let mut observer = |value: &char| seen.push(*value);
        observer.notify(&'a');
        observer.notify(&'b');
    }
    assert_eq!(seen, vec!['a', 'b']);
}

#[test]
fn test_forward() {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let mut observer = Forward::new(sender);
    observer.notify(&1);
    observer.notify(&2);
    drop(observer);
    assert_eq!(receiver.iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_forward_disconnected() {
    let (sender, receiver) = crossbeam_channel::unbounded::<u8>();
    drop(receiver);
    let mut observer = Forward::new(sender);
    observer.notify(&1);
}
