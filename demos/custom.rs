use wordmask::{Filter, Trie};

fn main() {
    let trie: Trie = ["fuck", "ab", "abc", "赌博"].into_iter().collect();
    let mut filter = Filter::new(trie);

    // Clean text is unaffected.
    show(&filter, "Hello world!");

    // Punctuation between letters doesn't help.
    show(&filter, "f-u_c.k off");
    show(&filter, "禁止赌~博");

    // The shortest word is masked as soon as it is found.
    show(&filter, "abc");

    filter.with_replacement("[redacted]");
    show(&filter, "what the f u c k");
}

fn show(filter: &Filter, text: &str) {
    println!(
        "{} -> {} ({} match(es))",
        text,
        filter.filter(text).unwrap_or_default(),
        filter.count(text)
    );
}
