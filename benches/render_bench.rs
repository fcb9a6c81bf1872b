use criterion::{black_box, criterion_group, criterion_main, Criterion};
use video_list_client::models::ListEnvelope;
use video_list_client::{render, ListPage, PageSelection, VideoSummary};

fn sample_page(items: usize, total: u64) -> ListPage {
    let videos = (0..items)
        .map(|i| VideoSummary::new(format!("{:024x}", i), format!("lecture-{:04}.mp4", i)))
        .collect();
    ListPage::new(videos, total)
}

fn bench_render(c: &mut Criterion) {
    let small = sample_page(10, 25);
    let selection = PageSelection::new(10, 1).unwrap();
    c.bench_function("render_small_page", |b| {
        b.iter(|| black_box(render(black_box(&small), selection)))
    });

    // Many short pages: the page selector dominates.
    let wide = sample_page(10, 100_000);
    c.bench_function("render_many_pages", |b| {
        b.iter(|| black_box(render(black_box(&wide), selection)))
    });

    let large = sample_page(500, 500);
    let large_selection = PageSelection::new(500, 1).unwrap();
    c.bench_function("render_to_text", |b| {
        b.iter(|| black_box(render(&large, large_selection).to_string()))
    });
}

fn bench_decode(c: &mut Criterion) {
    let list: Vec<serde_json::Value> = (0..100)
        .map(|i| serde_json::json!({"id": {"value": format!("{:024x}", i)}, "name": format!("video-{}.mp4", i)}))
        .collect();
    let body = serde_json::json!({"data": {"list": list, "pagination": {"total": 1000}}}).to_string();

    c.bench_function("decode_list_envelope", |b| {
        b.iter(|| {
            let envelope: ListEnvelope = serde_json::from_str(black_box(&body)).unwrap();
            black_box(ListPage::from(envelope))
        })
    });
}

criterion_group!(benches, bench_render, bench_decode);
criterion_main!(benches);
