use std::collections::LinkedList;
use std::collections::VecDeque;
use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use strand::LinkedSequence;

const SIZES: &[usize] = &[10000];

fn bench_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strand", size), &size, |b, &size| {
            b.iter(|| {
                let mut seq = LinkedSequence::new();
                for i in 0..size {
                    seq.push_front(black_box(i));
                }
                seq
            })
        });

        group.bench_with_input(
            BenchmarkId::new("std_linked_list", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut list = LinkedList::new();
                    for i in 0..size {
                        list.push_front(black_box(i));
                    }
                    list
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("vec_deque", size), &size, |b, &size| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for i in 0..size {
                    deque.push_front(black_box(i));
                }
                deque
            })
        });
    }

    group.finish();
}

fn bench_append_through_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_through_cursor");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strand", size), &size, |b, &size| {
            b.iter(|| {
                let mut seq = LinkedSequence::new();
                let mut cursor = seq.cursor_mut();
                for i in 0..size {
                    cursor.insert_after_move_to(black_box(i));
                }
                seq
            })
        });

        group.bench_with_input(
            BenchmarkId::new("std_linked_list", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut list = LinkedList::new();
                    for i in 0..size {
                        list.push_back(black_box(i));
                    }
                    list
                })
            },
        );
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        let seq: LinkedSequence<usize> = (0..size).collect();
        let list: LinkedList<usize> = (0..size).collect();
        let deque: VecDeque<usize> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("strand", size), &seq, |b, seq| {
            b.iter(|| seq.iter().map(|v| black_box(*v)).sum::<usize>())
        });

        group.bench_with_input(BenchmarkId::new("std_linked_list", size), &list, |b, list| {
            b.iter(|| list.iter().map(|v| black_box(*v)).sum::<usize>())
        });

        group.bench_with_input(BenchmarkId::new("vec_deque", size), &deque, |b, deque| {
            b.iter(|| deque.iter().map(|v| black_box(*v)).sum::<usize>())
        });
    }

    group.finish();
}

fn bench_splice_at_saved_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice_at_saved_position");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strand", size), &size, |b, &size| {
            // Insert and erase repeatedly at a handle saved mid-chain; each
            // splice is O(1) regardless of where the handle sits.
            let mut seq: LinkedSequence<usize> = (0..size).collect();
            let mut mid = seq.first_ptr().unwrap();
            for _ in 0..size / 2 {
                mid = seq.next_ptr(mid).unwrap();
            }

            b.iter(|| {
                for i in 0..size {
                    seq.insert_after(mid, black_box(i));
                    seq.erase_after(mid);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("vec_deque", size), &size, |b, &size| {
            let mut deque: VecDeque<usize> = (0..size).collect();
            let mid = size / 2;

            b.iter(|| {
                for i in 0..size {
                    deque.insert(mid, black_box(i));
                    deque.remove(mid);
                }
            })
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        let seq: LinkedSequence<usize> = (0..size).collect();
        let list: LinkedList<usize> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("strand", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.clone()))
        });

        group.bench_with_input(BenchmarkId::new("std_linked_list", size), &list, |b, list| {
            b.iter(|| black_box(list.clone()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_front,
    bench_append_through_cursor,
    bench_iteration,
    bench_splice_at_saved_position,
    bench_clone
);
criterion_main!(benches);
