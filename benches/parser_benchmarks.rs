//! Performance benchmarks for the Ferrow parser
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Parse throughput for typical script code
//! - Module parsing with imports and exports
//! - JSX-heavy component code
//! - ESTree serialization of a parsed tree

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ferrow::{parse_module, parse_script, to_estree, ParseOptions};

const SCRIPT: &str = r#"
var counter = 0;
function fibonacci(n) {
    if (n <= 1) return n;
    return fibonacci(n - 1) + fibonacci(n - 2);
}
var Point = (function () {
    function Point(x, y) { this.x = x; this.y = y; }
    Point.prototype.distance = function (other) {
        var dx = this.x - other.x, dy = this.y - other.y;
        return Math.sqrt(dx * dx + dy * dy);
    };
    return Point;
})();
for (var i = 0; i < 10; i++) {
    counter += i % 3 === 0 ? i : -i;
    if (/^\d+$/.test(String(i))) continue;
}
try { JSON.parse("{}"); } catch (e) { counter = 0; } finally { counter++; }
"#;

const MODERN: &str = r#"
{
class Queue {
    #items = [];
    static create(...values) { const q = new Queue(); values.forEach(v => q.push(v)); return q; }
    push(item) { this.#items.push(item); }
    get size() { return this.#items.length; }
    async *drain() { while (this.size) yield await Promise.resolve(this.#items.shift()); }
}
const { a, b: [c, , d = 4], ...rest } = { a: 1, b: [2, 3], e: 5 };
const total = [a, c, d].reduce((sum, value) => sum + value ** 2, 0);
const message = `total=${total} rest=${JSON.stringify({ ...rest })}`;
label: for (const [key, value] of Object.entries(rest)) {
    if (value?.nested ?? false) break label;
}
}
"#;

const MODULE: &str = r#"
import React, { useState, useEffect as effect } from 'react';
import * as utils from './utils.js';
export const VERSION = '1.0.0';
export function load(path) { return import(path).then(m => m.default); }
export default class Store {
    constructor(initial) { this.state = initial; }
    async update(fn) { this.state = await fn(this.state); }
}
export { utils, React as Framework };
export * from './types.js';
"#;

const JSX: &str = r#"
function TodoList({ items, onToggle }) {
    return (
        <ul className="todos">
            {items.map(item => (
                <li key={item.id} data-done={item.done ? 'yes' : 'no'} onClick={() => onToggle(item.id)}>
                    <input type="checkbox" checked={item.done} readOnly />
                    <span>{item.title}</span>
                    {item.tags.length > 0 && <Tags.List {...item} />}
                </li>
            ))}
        </ul>
    );
}
var App = () => <><Header title="Todos" /><TodoList items={[]} onToggle={id => id} /></>;
"#;

/// Benchmark: Script parsing at increasing input sizes
fn bench_script(c: &mut Criterion) {
    let mut group = c.benchmark_group("script");

    for copies in [1, 10, 100] {
        let source = SCRIPT.repeat(copies);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &source, |b, source| {
            b.iter(|| parse_script(black_box(source), ParseOptions::default()).unwrap())
        });
    }

    group.finish();
}

/// Benchmark: Newer syntax under the `next` option
fn bench_modern(c: &mut Criterion) {
    let options = ParseOptions::default().with_next(true);
    let source = MODERN.repeat(20);
    let mut group = c.benchmark_group("modern");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("next", |b| {
        b.iter(|| parse_script(black_box(&source), options).unwrap())
    });
    group.finish();
}

/// Benchmark: Module goal with import/export bookkeeping
fn bench_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("module");
    group.throughput(Throughput::Bytes(MODULE.len() as u64));
    group.bench_function("imports_exports", |b| {
        b.iter(|| parse_module(black_box(MODULE), ParseOptions::default()).unwrap())
    });
    group.finish();
}

/// Benchmark: JSX components
fn bench_jsx(c: &mut Criterion) {
    let options = ParseOptions::default().with_jsx(true);
    let source = JSX.repeat(20);
    let mut group = c.benchmark_group("jsx");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("components", |b| {
        b.iter(|| parse_script(black_box(&source), options).unwrap())
    });
    group.finish();
}

/// Benchmark: Position tracking overhead and ESTree serialization
fn bench_estree(c: &mut Criterion) {
    let mut group = c.benchmark_group("estree");
    let source = SCRIPT.repeat(10);

    let full = ParseOptions::default()
        .with_ranges(true)
        .with_locations(true)
        .with_raw(true);
    group.bench_function("parse_with_positions", |b| {
        b.iter(|| parse_script(black_box(&source), full).unwrap())
    });

    let program = parse_script(&source, full).unwrap();
    group.bench_function("to_json", |b| b.iter(|| to_estree(black_box(&program))));

    group.finish();
}

criterion_group!(benches, bench_script, bench_modern, bench_module, bench_jsx, bench_estree);
criterion_main!(benches);
