//! Rendering benchmarks for mdcat
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use mdcat::Options;

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"# Heading

This is a paragraph with *emphasis* and **strong** text.

- Item 1
- Item 2
- Item 3

`inline code` and a trailing sentence.
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains various inline elements like *emphasis*, **strong**,
`code`, and ***both at once***.

- First bullet point with **bold** text
- Second bullet point with *italic* text
1. Ordered point with `code`

> A blockquote that spans
> multiple lines.

```rust
fn example() {
    let x = 42;
    println!("{}", x);
}
```

---
"#;
        section.repeat(50)
    }

    /// Table with many rows and unicode cells
    pub fn table(rows: usize) -> String {
        let mut doc = String::from("| Name | Description | Count |\n|:---|:---:|---:|\n");
        for i in 0..rows {
            doc.push_str(&format!("| item {i} | **naïve** `code` cell | {} |\n", i * 7));
        }
        doc
    }

    /// Long marker runs that cascade through window toggles
    pub fn marker_runs() -> String {
        "*****_____ a ".repeat(2000)
    }
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let styled = Options { color: true };
    let plain = Options { color: false };

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| mdcat::render_str(black_box(samples::TINY), &styled))
    });

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| mdcat::render_str(black_box(samples::SMALL), &styled))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| mdcat::render_str(black_box(&large), &styled))
    });
    group.bench_function("large_plain", |b| {
        b.iter(|| mdcat::render_str(black_box(&large), &plain))
    });

    group.finish();
}

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    let options = Options::default();

    // The row limit ends a table, so the larger document holds several.
    for rows in [16, 256, 1024] {
        let doc = samples::table(rows);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_function(format!("rows_{rows}"), |b| {
            b.iter(|| mdcat::render_str(black_box(&doc), &options))
        });
    }

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let runs = samples::marker_runs();
    group.throughput(Throughput::Bytes(runs.len() as u64));
    group.bench_function("marker_runs", |b| {
        b.iter(|| mdcat::render_str(black_box(&runs), &Options::default()))
    });

    let width = samples::marker_runs();
    group.bench_function("visible_width", |b| {
        b.iter(|| mdcat::visible_width(black_box(width.as_bytes())))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");
    let input = samples::large();
    let options = Options::default();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| mdcat::render_bytes(black_box(input.as_bytes()), &options))
    });

    group.bench_function("with_reuse", |b| {
        let mut buffer = Vec::with_capacity(input.len() * 2);
        b.iter(|| {
            buffer.clear();
            mdcat::render(black_box(input.as_bytes()), &mut buffer, &options).unwrap();
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rendering,
    bench_tables,
    bench_pathological,
    bench_buffer_reuse
);
criterion_main!(benches);
