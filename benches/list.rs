use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cursor_list::List;
use std::collections::LinkedList;

fn bench_push_back(c: &mut Criterion) {
    let n = 1024;
    let mut group = c.benchmark_group("LinkedList vs List (PushBack 1024)");
    group.bench_function("std::collections::LinkedList", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..n {
                list.push_back(black_box(i));
            }
            list
        })
    });
    group.bench_function("cursor_list::List", |b| {
        b.iter(|| {
            let mut list = List::new();
            for i in 0..n {
                list.push_back(black_box(i));
            }
            list
        })
    });
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    // Reversed input, the worst case for the adjacent-pair sort.
    let input: Vec<i32> = (0..256).rev().collect();
    let mut group = c.benchmark_group("List sort (reversed 256)");
    group.bench_function("List::sort", |b| {
        b.iter(|| {
            let mut list: List<_> = input.iter().copied().collect();
            list.sort();
            list
        })
    });
    group.bench_function("Vec::sort (baseline)", |b| {
        b.iter(|| {
            let mut vec = input.clone();
            vec.sort();
            vec
        })
    });
    group.finish();
}

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("List splice_at (1024 into 1024)");
    group.bench_function("List::splice_at", |b| {
        b.iter(|| {
            let mut list: List<i32> = (0..1024).collect();
            let mut other: List<i32> = (0..1024).collect();
            list.splice_at(black_box(512), &mut other);
            list
        })
    });
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("List merge (512 + 512)");
    group.bench_function("List::merge", |b| {
        b.iter(|| {
            let mut list: List<i32> = (0..1024).step_by(2).collect();
            let mut other: List<i32> = (1..1024).step_by(2).collect();
            list.merge(&mut other);
            list
        })
    });
    group.finish();
}

criterion_group!(benches, bench_push_back, bench_sort, bench_splice, bench_merge);
criterion_main!(benches);
