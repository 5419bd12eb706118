fn main() {
    let values = vec![(1, "a)"), (2, "b]")];
    /* unbalanced in a comment: ((( */
    for (n, s) in &values {
        println!("{}: {}", n, s); // trailing )
    }
}
