#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

//! Walks both maps through the classic put / resize / lookup / removal
//! scenarios and prints what they report at each step.

use std::fmt::Display;

use strmap::{
    ChainingMap, HashFunction, OpenAddressingMap, StringMap, find_mode, hash_function_1,
    hash_function_2,
};

/// Builds an empty map from `(capacity, hash_function)`
type Constructor<M> = fn(usize, HashFunction) -> M;

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.len()));
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn put_examples<M: StringMap<usize>>(new: Constructor<M>) {
    heading("put example 1");
    let mut m = new(53, hash_function_1);
    for i in 0..150 {
        m.put(format!("str{i}"), i * 100);
        if i % 25 == 24 {
            let load = round2(m.table_load());
            println!("{} {} {} {}", m.empty_buckets(), load, m.len(), m.capacity());
        }
    }

    heading("put example 2");
    let mut m = new(41, hash_function_2);
    for i in 0..50 {
        m.put(format!("str{}", i / 3), i * 100);
        if i % 10 == 9 {
            let load = round2(m.table_load());
            println!("{} {} {} {}", m.empty_buckets(), load, m.len(), m.capacity());
        }
    }
}

fn load_and_empty_examples<M: StringMap<usize>>(new: Constructor<M>) {
    heading("table_load example 1");
    let mut m = new(101, hash_function_1);
    println!("{}", round2(m.table_load()));
    for (key, value) in [("key1", 10), ("key2", 20), ("key1", 30)] {
        m.put(key.to_owned(), value);
        println!("{}", round2(m.table_load()));
    }

    heading("table_load example 2");
    let mut m = new(53, hash_function_1);
    for i in 0..50 {
        m.put(format!("key{i}"), i * 100);
        if i % 10 == 0 {
            println!("{} {} {}", round2(m.table_load()), m.len(), m.capacity());
        }
    }

    heading("empty_buckets example 1");
    let mut m = new(101, hash_function_1);
    println!("{} {} {}", m.empty_buckets(), m.len(), m.capacity());
    for (key, value) in [("key1", 10), ("key2", 20), ("key1", 30), ("key4", 40)] {
        m.put(key.to_owned(), value);
        println!("{} {} {}", m.empty_buckets(), m.len(), m.capacity());
    }

    heading("empty_buckets example 2");
    let mut m = new(53, hash_function_1);
    for i in 0..150 {
        m.put(format!("key{i}"), i * 100);
        if i % 30 == 0 {
            println!("{} {} {}", m.empty_buckets(), m.len(), m.capacity());
        }
    }
}

fn resize_examples<M: StringMap<usize>>(new: Constructor<M>, first_key: usize) {
    heading("resize example 1");
    let mut m = new(20, hash_function_1);
    m.put("key1".to_owned(), 10);
    println!("{} {} {:?} {}", m.len(), m.capacity(), m.get("key1"), m.contains_key("key1"));
    m.resize_table(30);
    println!("{} {} {:?} {}", m.len(), m.capacity(), m.get("key1"), m.contains_key("key1"));

    heading("resize example 2");
    let mut m = new(75, hash_function_2);
    let keys: Vec<usize> = (first_key..1000).step_by(13).collect();
    for &key in &keys {
        m.put(key.to_string(), key * 42);
    }
    println!("{} {}", m.len(), m.capacity());

    for capacity in (111..1000).step_by(117) {
        m.resize_table(capacity);

        m.put("some key".to_owned(), 0);
        let mut result = m.contains_key("some key");
        m.remove("some key");

        for &key in &keys {
            result &= m.contains_key(&key.to_string());
            result &= !m.contains_key(&(key + 1).to_string());
        }
        println!("{capacity} {result} {} {} {}", m.len(), m.capacity(), round2(m.table_load()));
    }
}

fn lookup_examples<M: StringMap<usize>>(new: Constructor<M>) {
    heading("get example 1");
    let mut m = new(31, hash_function_1);
    println!("{:?}", m.get("key"));
    m.put("key1".to_owned(), 10);
    println!("{:?}", m.get("key1"));

    heading("get example 2");
    let mut m = new(151, hash_function_2);
    for i in (200..300).step_by(7) {
        m.put(i.to_string(), i * 10);
    }
    println!("{} {}", m.len(), m.capacity());
    for i in (200..300).step_by(21) {
        println!("{i} {:?} {}", m.get(&i.to_string()), m.get(&i.to_string()) == Some(&(i * 10)));
        let j = i + 1;
        println!("{j} {:?} {}", m.get(&j.to_string()), m.get(&j.to_string()) == Some(&(j * 10)));
    }

    heading("contains_key example 1");
    let mut m = new(11, hash_function_1);
    println!("{}", m.contains_key("key1"));
    m.put("key1".to_owned(), 10);
    m.put("key2".to_owned(), 20);
    m.put("key3".to_owned(), 30);
    for key in ["key1", "key4", "key2", "key3"] {
        println!("{}", m.contains_key(key));
    }
    m.remove("key3");
    println!("{}", m.contains_key("key3"));

    heading("contains_key example 2");
    let mut m = new(79, hash_function_2);
    let keys: Vec<usize> = (1..1000).step_by(20).collect();
    for &key in &keys {
        m.put(key.to_string(), key * 42);
    }
    println!("{} {}", m.len(), m.capacity());
    let result = keys
        .iter()
        .all(|key| m.contains_key(&key.to_string()) && !m.contains_key(&(key + 1).to_string()));
    println!("{result}");

    heading("remove example 1");
    let mut m = new(53, hash_function_1);
    println!("{:?}", m.get("key1"));
    m.put("key1".to_owned(), 10);
    println!("{:?}", m.get("key1"));
    m.remove("key1");
    println!("{:?}", m.get("key1"));
    m.remove("key4");
}

fn clear_examples<M: StringMap<usize>>(new: Constructor<M>) {
    heading("clear example 1");
    let mut m = new(101, hash_function_1);
    println!("{} {}", m.len(), m.capacity());
    m.put("key1".to_owned(), 10);
    m.put("key2".to_owned(), 20);
    m.put("key1".to_owned(), 30);
    println!("{} {}", m.len(), m.capacity());
    m.clear();
    println!("{} {}", m.len(), m.capacity());

    heading("clear example 2");
    let mut m = new(53, hash_function_1);
    println!("{} {}", m.len(), m.capacity());
    m.put("key1".to_owned(), 10);
    println!("{} {}", m.len(), m.capacity());
    m.put("key2".to_owned(), 20);
    println!("{} {}", m.len(), m.capacity());
    m.resize_table(100);
    println!("{} {}", m.len(), m.capacity());
    m.clear();
    println!("{} {}", m.len(), m.capacity());
}

fn keys_and_values_example<M: StringMap<String>>(new: Constructor<M>) {
    heading("get_keys_and_values example 1");
    let mut m = new(11, hash_function_2);
    for i in 1..6 {
        m.put(i.to_string(), (i * 10).to_string());
    }
    println!("{:?}", m.get_keys_and_values());

    m.resize_table(2);
    println!("{:?}", m.get_keys_and_values());

    m.put("20".to_owned(), "200".to_owned());
    m.remove("1");
    m.resize_table(12);
    println!("{:?}", m.get_keys_and_values());
}

fn dump<M: Display>(title: &str, map: &M) {
    heading(title);
    print!("{map}");
}

fn iteration_examples() {
    let mut m = OpenAddressingMap::new(10, hash_function_1);
    for i in 0..5 {
        m.put(i.to_string(), (i * 10).to_string());
    }
    dump("iteration example 1", &m);
    for (key, value) in &m {
        println!("K: {key} V: {value}");
    }

    let mut m = OpenAddressingMap::new(10, hash_function_2);
    for i in 0..5 {
        m.put(i.to_string(), (i * 24).to_string());
    }
    m.remove("0");
    m.remove("4");
    dump("iteration example 2", &m);
    for (key, value) in &m {
        println!("K: {key} V: {value}");
    }

    let mut m = ChainingMap::new(5, hash_function_1);
    for key in ["ab", "ba", "c", "d"] {
        m.put(key, key.len());
    }
    dump("chain dump", &m);
}

fn refused_resize_example() {
    heading("try_resize_table");
    let mut open = OpenAddressingMap::new(11, hash_function_1);
    let mut chained = ChainingMap::new(11, hash_function_1);
    for i in 0..5 {
        open.put(i.to_string(), i);
        chained.put(i.to_string(), i);
    }

    match open.try_resize_table(3) {
        Ok(()) => println!("open addressing resized to {}", open.capacity()),
        Err(error) => println!("open addressing refused: {error}"),
    }
    match chained.try_resize_table(3) {
        Ok(()) => println!("chaining resized to {}", chained.capacity()),
        Err(error) => println!("chaining refused: {error}"),
    }
    match chained.try_resize_table(0) {
        Ok(()) => println!("chaining resized to {}", chained.capacity()),
        Err(error) => println!("chaining refused: {error}"),
    }
}

fn find_mode_examples() {
    let cases: [&[&str]; 4] = [
        &["apple", "apple", "grape", "melon", "peach"],
        &["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"],
        &["one", "two", "three", "four", "five"],
        &["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"],
    ];

    heading("find_mode");
    for case in cases {
        let (mode, frequency) = find_mode(case);
        println!("Input: {case:?}\nMode : {mode:?}, Frequency: {frequency}\n");
    }
}

fn main() {
    println!("==== open addressing ====");
    put_examples::<OpenAddressingMap<usize>>(OpenAddressingMap::new);
    load_and_empty_examples::<OpenAddressingMap<usize>>(OpenAddressingMap::new);
    resize_examples::<OpenAddressingMap<usize>>(OpenAddressingMap::new, 25);
    lookup_examples::<OpenAddressingMap<usize>>(OpenAddressingMap::new);
    clear_examples::<OpenAddressingMap<usize>>(OpenAddressingMap::new);
    keys_and_values_example::<OpenAddressingMap<String>>(OpenAddressingMap::new);

    println!("\n==== separate chaining ====");
    put_examples::<ChainingMap<usize>>(ChainingMap::new);
    load_and_empty_examples::<ChainingMap<usize>>(ChainingMap::new);
    resize_examples::<ChainingMap<usize>>(ChainingMap::new, 1);
    lookup_examples::<ChainingMap<usize>>(ChainingMap::new);
    clear_examples::<ChainingMap<usize>>(ChainingMap::new);
    keys_and_values_example::<ChainingMap<String>>(ChainingMap::new);

    println!("\n==== diagnostics ====");
    iteration_examples();
    refused_resize_example();
    find_mode_examples();
}
