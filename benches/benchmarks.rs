// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pastemd_site::{format_stars, parse_site, pastemd, write_site_json};

fn benchmark_format_stars(c: &mut Criterion,)
{
    c.bench_function("format_stars_mixed", |b| {
        b.iter(|| {
            for count in [0u64, 999, 1000, 1050, 4231, 2549, 1_500_000] {
                black_box(format_stars(black_box(count,),),);
            }
        },)
    },);
}

fn benchmark_built_in_export(c: &mut Criterion,)
{
    let site = pastemd();

    c.bench_function("export_built_in_site", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(8 * 1024,);
            write_site_json(&mut buffer, black_box(&site,), false,).expect("export failed",);
            black_box(buffer.len(),)
        },)
    },);
}

fn benchmark_parse_site(c: &mut Criterion,)
{
    let yaml = r"
title: PasteMD
cleanUrls: true
locales:
  root:
    label: 简体中文
    lang: zh-CN
    nav:
      - text: 指南
        link: /guide/introduction
    sidebar:
      /guide/:
        - text: 开始
          items:
            - text: 简介
              link: /guide/introduction
            - text: 安装
              link: /guide/installation
  en:
    label: English
    lang: en-US
    nav:
      - text: Guide
        link: /en/guide/introduction
";

    c.bench_function("parse_bilingual_site", |b| {
        b.iter(|| parse_site(black_box(yaml,),).expect("parse failed",),)
    },);
}

criterion_group!(benches, benchmark_format_stars, benchmark_built_in_export, benchmark_parse_site);
criterion_main!(benches);
