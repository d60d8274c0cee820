// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Built-in configuration of the bilingual PasteMD documentation site.
//!
//! Simplified Chinese is served from the root; English lives under `/en/`.

use std::collections::BTreeMap;

use crate::{
    config::{
        Footer, HeadEntry, LocaleConfig, NavItem, ROOT_LOCALE, SearchConfig, SearchLocale,
        SearchProvider, SidebarGroup, SiteConfiguration, SocialLink,
    },
    stars::RepositoryRef,
};

const SITE_TITLE: &str = "PasteMD";
const LOGO: &str = "/logo.png";
const COPYRIGHT: &str = "Copyright © 2025 RichQAQ";

/// Returns the PasteMD documentation site configuration.
///
/// # Examples
///
/// ```
/// use pastemd_site::{pastemd, validate_site};
///
/// let site = pastemd();
/// assert!(validate_site(&site).is_ok());
/// assert_eq!(site.locales.len(), 2);
/// ```
pub fn pastemd() -> SiteConfiguration
{
    let repository = RepositoryRef::default();

    let mut locales = BTreeMap::new();
    locales.insert(ROOT_LOCALE.to_owned(), chinese_locale(&repository,),);
    locales.insert("en".to_owned(), english_locale(&repository,),);

    SiteConfiguration {
        title: SITE_TITLE.to_owned(),
        head: vec![
            HeadEntry::new("link", &[("rel", "icon",), ("href", LOGO,)],),
            HeadEntry::new("meta", &[("name", "theme-color",), ("content", "#3c8772",)],),
        ],
        last_updated: true,
        clean_urls: true,
        ignore_dead_links: true,
        logo: Some(LOGO.to_owned(),),
        social_links: vec![SocialLink {
            icon: "github".to_owned(), link: repository.html_url(),
        }],
        search: Some(SearchConfig {
            provider: SearchProvider::Local,
            locales:  BTreeMap::from([(ROOT_LOCALE.to_owned(), chinese_search(),)],),
        },),
        locales,
    }
}

fn chinese_locale(repository: &RepositoryRef,) -> LocaleConfig
{
    LocaleConfig {
        label:               "简体中文".to_owned(),
        language_tag:        "zh-CN".to_owned(),
        description:         "一键把 Markdown 粘贴为 Word、WPS、Excel、PowerPoint 与 OneNote 中的原生格式"
            .to_owned(),
        navigation_items:    vec![
            NavItem::new("首页", "/",),
            NavItem::new("指南", "/guide/introduction",),
            NavItem::new("功能", "/features/word",),
            NavItem::new("配置", "/config/settings",),
            NavItem::new("更新日志", &format!("{}/releases", repository.html_url()),),
        ],
        sidebar_groups:      BTreeMap::from([
            ("/guide/".to_owned(), vec![group("开始", &[
                ("简介", "/guide/introduction",),
                ("安装", "/guide/installation",),
                ("快速上手", "/guide/quick-start",),
                ("常见问题", "/guide/faq",),
            ],)],),
            ("/features/".to_owned(), vec![
                group("办公软件", &[
                    ("Word", "/features/word",),
                    ("WPS 文字", "/features/wps",),
                    ("Excel 与 WPS 表格", "/features/excel",),
                    ("PowerPoint", "/features/powerpoint",),
                    ("OneNote", "/features/onenote",),
                ],),
                group("进阶", &[
                    ("公式转换", "/features/formula",),
                    ("文件与 Markdown 工作流", "/features/extensible",),
                ],),
            ],),
            ("/config/".to_owned(), vec![group("配置", &[
                ("设置面板", "/config/settings",),
                ("快捷键", "/config/hotkeys",),
                ("托盘菜单", "/config/tray",),
            ],)],),
        ],),
        footer:              Footer {
            message:   "基于 MIT 许可发布".to_owned(),
            copyright: COPYRIGHT.to_owned(),
        },
        translation_strings: strings(&[
            ("outline.label", "页面导航",),
            ("docFooter.prev", "上一页",),
            ("docFooter.next", "下一页",),
            ("lastUpdated.text", "最后更新于",),
            ("editLink.text", "在 GitHub 上编辑此页面",),
            ("returnToTopLabel", "回到顶部",),
            ("sidebarMenuLabel", "菜单",),
            ("darkModeSwitchLabel", "主题",),
            ("lightModeSwitchTitle", "切换到浅色模式",),
            ("darkModeSwitchTitle", "切换到深色模式",),
            ("langMenuLabel", "多语言",),
            ("notFound.title", "页面未找到",),
            ("notFound.linkText", "返回首页",),
        ],),
    }
}

fn english_locale(repository: &RepositoryRef,) -> LocaleConfig
{
    LocaleConfig {
        label:               "English".to_owned(),
        language_tag:        "en-US".to_owned(),
        description:         "Paste Markdown as native content in Word, WPS, Excel, PowerPoint and OneNote"
            .to_owned(),
        navigation_items:    vec![
            NavItem::new("Home", "/en/",),
            NavItem::new("Guide", "/en/guide/introduction",),
            NavItem::new("Features", "/en/features/word",),
            NavItem::new("Configuration", "/en/config/settings",),
            NavItem::new("Changelog", &format!("{}/releases", repository.html_url()),),
        ],
        sidebar_groups:      BTreeMap::from([
            ("/en/guide/".to_owned(), vec![group("Getting Started", &[
                ("Introduction", "/en/guide/introduction",),
                ("Installation", "/en/guide/installation",),
                ("Quick Start", "/en/guide/quick-start",),
                ("FAQ", "/en/guide/faq",),
            ],)],),
            ("/en/features/".to_owned(), vec![
                group("Office Apps", &[
                    ("Word", "/en/features/word",),
                    ("WPS Writer", "/en/features/wps",),
                    ("Excel & WPS Spreadsheets", "/en/features/excel",),
                    ("PowerPoint", "/en/features/powerpoint",),
                    ("OneNote", "/en/features/onenote",),
                ],),
                group("Advanced", &[
                    ("Formula Conversion", "/en/features/formula",),
                    ("File & Markdown Workflows", "/en/features/extensible",),
                ],),
            ],),
            ("/en/config/".to_owned(), vec![group("Configuration", &[
                ("Settings Dialog", "/en/config/settings",),
                ("Hotkeys", "/en/config/hotkeys",),
                ("Tray Menu", "/en/config/tray",),
            ],)],),
        ],),
        footer:              Footer {
            message:   "Released under the MIT License.".to_owned(),
            copyright: COPYRIGHT.to_owned(),
        },
        translation_strings: strings(&[
            ("editLink.text", "Edit this page on GitHub",),
            ("lastUpdated.text", "Last updated",),
        ],),
    }
}

fn chinese_search() -> SearchLocale
{
    SearchLocale {
        translations: strings(&[
            ("button.buttonText", "搜索文档",),
            ("button.buttonAriaLabel", "搜索文档",),
            ("modal.displayDetails", "显示详细列表",),
            ("modal.resetButtonTitle", "清除查询条件",),
            ("modal.backButtonTitle", "关闭搜索",),
            ("modal.noResultsText", "无法找到相关结果",),
            ("modal.footer.selectText", "选择",),
            ("modal.footer.navigateText", "切换",),
            ("modal.footer.closeText", "关闭",),
        ],),
    }
}

fn group(text: &str, items: &[(&str, &str,)],) -> SidebarGroup
{
    SidebarGroup {
        text:      text.to_owned(),
        collapsed: Some(false,),
        items:     items.iter().map(|(text, link,)| NavItem::new(text, link,),).collect(),
    }
}

fn strings(pairs: &[(&str, &str,)],) -> BTreeMap<String, String,>
{
    pairs.iter().map(|(key, value,)| ((*key).to_owned(), (*value).to_owned(),),).collect()
}
