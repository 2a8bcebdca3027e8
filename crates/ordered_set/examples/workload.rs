use ordered_set::AvlTreeSet;

fn print_tree(set: &AvlTreeSet) {
    for line in set.lines() {
        println!("{line}");
    }
}

fn main() {
    let mut set = AvlTreeSet::new();
    for key in [10, 5, 15, 3, 8, 12, 2, 20] {
        set.insert(key);
    }

    println!("initial tree:");
    print_tree(&set);
    println!("contains 8: {}", set.contains(8));

    set.remove(12);
    println!("after removing 12:");
    print_tree(&set);

    set.remove(20);
    println!("after removing 20:");
    print_tree(&set);

    set.insert(13);
    println!("after inserting 13:");
    print_tree(&set);
}
