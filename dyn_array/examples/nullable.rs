use dyn_array::{ArrayList, ErrorKind};

#[cfg_attr(test, test)]
fn main() {
    let mut list = ArrayList::new();
    list.extend([Some("north"), None, Some("south"), None]);

    println!("{:?}", list.find_first_present(Some(&"south")));
    println!("absent values stored: {}", list.count_absent());

    let error = list.find_first_present(None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NullArgument);
    println!("{error}");

    while list.remove(&None) {}
    println!("{list:?}");
    assert_eq!(list, [Some("north"), Some("south")]);
}
