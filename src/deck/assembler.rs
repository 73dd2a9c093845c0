//! Building the slide deck from figure groups.

use super::config::DeckConfig;
use super::source::{FigureGroup, FigureSource, FsFigureSource, ImageEntry};
use crate::common::Result;
use crate::common::unit::fraction_of;
use crate::images::{ConversionReport, convert_scientific_images};
use crate::layout::{LayoutEngine, LayoutError, Placement, Rect};
use crate::ooxml::pptx::{MutablePresentation, MutableSlide, SlideLayout, TextFormat};
use log::{info, warn};
use std::path::PathBuf;

/// Title box of content slides, as fractions of the canvas.
const TITLE_TOP: f64 = 0.03;
const TITLE_HEIGHT: f64 = 0.15;
const TITLE_WIDTH: f64 = 0.85;

/// Slide number box, as fractions of the canvas. Its height follows the width.
const NUMBER_LEFT: f64 = 0.95;
const NUMBER_TOP: f64 = 0.95;
const NUMBER_WIDTH: f64 = 0.05;
const NUMBER_HEIGHT: f64 = 0.03;

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckReport {
    /// Where the deck was saved
    pub output: PathBuf,
    /// Slides in the deck, title slide included
    pub slides: usize,
    /// Pictures placed across all slides
    pub images: usize,
    /// Groups without images, in discovery order
    pub skipped_groups: Vec<String>,
    /// Outcome of the TIFF pass, when it ran
    pub conversion: Option<ConversionReport>,
}

/// Turns figure groups into a presentation, one slide per non-empty group.
pub struct DeckAssembler<S: FigureSource> {
    config: DeckConfig,
    source: S,
    engine: LayoutEngine,
    images: usize,
    skipped_groups: Vec<String>,
}

impl DeckAssembler<FsFigureSource> {
    /// Assembler reading the directory named in the configuration.
    pub fn from_config(config: DeckConfig) -> Self {
        let source =
            FsFigureSource::new(&config.input_dir, &config.extensions, config.sort_by_name);
        Self::new(config, source)
    }
}

impl<S: FigureSource> DeckAssembler<S> {
    pub fn new(config: DeckConfig, source: S) -> Self {
        let engine = LayoutEngine::new(config.layout.clone());
        Self {
            config,
            source,
            engine,
            images: 0,
            skipped_groups: Vec::new(),
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Build the presentation in memory.
    ///
    /// Slide 0 is the title slide. Every group with images gets one slide
    /// titled with the group name and numbered from 1; groups without images
    /// are skipped with a warning. A group with more images than the layout
    /// allows aborts the whole deck.
    pub fn assemble(&mut self) -> Result<MutablePresentation> {
        self.images = 0;
        self.skipped_groups.clear();

        let canvas = self.config.canvas;
        let mut pres = MutablePresentation::with_size(canvas.width, canvas.height);
        pres.set_document_title(&self.config.deck_name);
        pres.add_slide_with_layout(SlideLayout::TitleSlide)
            .set_title(&self.config.title_text);

        info!("Pasting figures to deck...");
        let mut slide_number = 0;
        for group in self.source.list_groups()? {
            info!("folder: {}", group.name);
            let Some(entries) = self.measure(&group)? else {
                warn!(
                    "no {:?} images found in {}!",
                    self.config.extensions, group.name
                );
                self.skipped_groups.push(group.name);
                continue;
            };

            let ratios: Vec<f64> = entries.iter().map(ImageEntry::aspect_ratio).collect();
            let placements = self.engine.layout(&ratios, canvas, self.config.keep_ratio)?;

            slide_number += 1;
            let slide = pres.add_slide_with_layout(SlideLayout::TitleOnly);
            self.place_title(slide, &group.name);
            for (entry, placement) in entries.iter().zip(&placements) {
                self.place_figure(slide, entry, placement)?;
            }
            self.place_number(slide, slide_number);
            self.images += entries.len();
        }

        Ok(pres)
    }

    /// Convert TIFFs, assemble and save the deck.
    pub fn run(&mut self) -> Result<DeckReport> {
        self.config.validate()?;
        let input = &self.config.input_dir;
        if !input.exists() {
            return Err(crate::common::Error::InputNotFound(input.clone()));
        }

        let output_dir = &self.config.output_dir;
        if output_dir.exists() {
            warn!(
                "{} already exists. Existing deck may be overwritten!",
                output_dir.display()
            );
        } else {
            std::fs::create_dir_all(output_dir)?;
        }

        let conversion = if self.config.conversion.enabled {
            Some(convert_scientific_images(
                input,
                &self.config.conversion.options(),
            )?)
        } else {
            None
        };

        let pres = self.assemble()?;
        let output = self.config.output_path();
        pres.save(&output)?;
        info!("Done! Deck saved at {}.", output.display());

        Ok(DeckReport {
            output,
            slides: pres.slide_count(),
            images: self.images,
            skipped_groups: self.skipped_groups.clone(),
            conversion,
        })
    }

    /// Measure every image of a group, `None` when the group is empty.
    fn measure(&self, group: &FigureGroup) -> Result<Option<Vec<ImageEntry>>> {
        if group.is_empty() {
            return Ok(None);
        }
        let max = self.engine.config().max_images;
        if group.images.len() > max {
            return Err(LayoutError::TooManyImages {
                count: group.images.len(),
                max,
            }
            .into());
        }

        let entries = group
            .images
            .iter()
            .map(|path| {
                let (width, height) = self.source.dimensions(path)?;
                Ok(ImageEntry::new(path.clone(), width, height))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(entries))
    }

    fn place_title(&self, slide: &mut MutableSlide, name: &str) {
        let canvas = self.config.canvas;
        let width = fraction_of(canvas.width, TITLE_WIDTH);
        slide.set_title(name);
        slide.set_title_geometry(Rect::new(
            (canvas.width - width).div_euclid(2),
            fraction_of(canvas.height, TITLE_TOP),
            width,
            fraction_of(canvas.height, TITLE_HEIGHT),
        ));
        slide.set_title_format(TextFormat {
            size: Some(self.config.title_font_pt),
            centered: true,
        });
    }

    fn place_figure(
        &self,
        slide: &mut MutableSlide,
        entry: &ImageEntry,
        placement: &Placement,
    ) -> Result<()> {
        let data = self.source.read(entry.path())?;
        slide.add_picture_from_bytes(
            data,
            placement.rect,
            Some(entry.file_name().to_string()),
        )?;
        slide
            .add_text_box(entry.file_name(), placement.caption)
            .font_size(self.config.caption_font_pt);
        Ok(())
    }

    fn place_number(&self, slide: &mut MutableSlide, number: usize) {
        let canvas = self.config.canvas;
        let frame = Rect::new(
            fraction_of(canvas.width, NUMBER_LEFT),
            fraction_of(canvas.height, NUMBER_TOP),
            fraction_of(canvas.width, NUMBER_WIDTH),
            fraction_of(canvas.width, NUMBER_HEIGHT),
        );
        slide
            .add_text_box(&number.to_string(), frame)
            .font_size(self.config.number_font_pt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use image::{DynamicImage, GrayImage};
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::path::Path;

    /// In-memory figures, every image a tiny PNG of the recorded size.
    struct MemorySource {
        groups: Vec<FigureGroup>,
        sizes: HashMap<PathBuf, (u32, u32)>,
    }

    impl MemorySource {
        fn new() -> Self {
            Self {
                groups: Vec::new(),
                sizes: HashMap::new(),
            }
        }

        fn group(mut self, name: &str, images: &[(&str, u32, u32)]) -> Self {
            let paths = images
                .iter()
                .map(|&(file, width, height)| {
                    let path = PathBuf::from(name).join(file);
                    self.sizes.insert(path.clone(), (width, height));
                    path
                })
                .collect();
            self.groups.push(FigureGroup::new(name, paths));
            self
        }
    }

    impl FigureSource for MemorySource {
        fn list_groups(&self) -> Result<Vec<FigureGroup>> {
            Ok(self.groups.clone())
        }

        fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
            self.sizes
                .get(path)
                .copied()
                .ok_or_else(|| Error::InputNotFound(path.to_path_buf()))
        }

        fn read(&self, path: &Path) -> Result<Vec<u8>> {
            let (width, height) = self.dimensions(path)?;
            let mut bytes = Vec::new();
            DynamicImage::ImageLuma8(GrayImage::new(width, height))
                .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
                .unwrap();
            Ok(bytes)
        }
    }

    #[test]
    fn test_title_slide_only_for_empty_input() {
        let mut assembler = DeckAssembler::new(DeckConfig::default(), MemorySource::new());
        let pres = assembler.assemble().unwrap();
        assert_eq!(pres.slide_count(), 1);

        let title = pres.slide(0).unwrap();
        assert_eq!(title.layout(), SlideLayout::TitleSlide);
        assert_eq!(title.title(), Some("add title here"));
        assert_eq!(title.shape_count(), 0);
    }

    #[test]
    fn test_content_slide_geometry() {
        let source = MemorySource::new().group("run_1", &[("a.png", 4, 4), ("b.png", 4, 4)]);
        let config = DeckConfig {
            keep_ratio: false,
            ..Default::default()
        };
        let mut assembler = DeckAssembler::new(config, source);
        let pres = assembler.assemble().unwrap();
        assert_eq!(pres.slide_count(), 2);

        let slide = pres.slide(1).unwrap();
        assert_eq!(slide.layout(), SlideLayout::TitleOnly);
        assert_eq!(slide.title(), Some("run_1"));
        assert_eq!(slide.title_geometry(), Some(Rect::new(685_800, 154_305, 7_772_400, 771_525)));
        assert_eq!(slide.title_format().size, Some(40.0));
        assert!(slide.title_format().centered);

        let shapes = slide.shapes();
        assert_eq!(shapes.len(), 5);
        assert!(shapes[0].is_picture());
        assert_eq!(shapes[0].bounds(), Rect::new(1_125_855, 1_285_875, 3_343_275, 3_343_275));
        assert_eq!(shapes[1].text(), Some("a.png"));
        assert_eq!(shapes[1].bounds(), Rect::new(1_125_855, 4_577_715, 3_343_275, 205_740));
        assert_eq!(shapes[1].text_format().and_then(|f| f.size), Some(13.0));
        assert!(shapes[2].is_picture());
        assert_eq!(shapes[3].text(), Some("b.png"));

        let number = &shapes[4];
        assert_eq!(number.text(), Some("1"));
        assert_eq!(number.bounds(), Rect::new(8_686_800, 4_886_325, 457_200, 274_320));
    }

    #[test]
    fn test_empty_groups_do_not_consume_numbers() {
        let source = MemorySource::new()
            .group("first", &[("x.png", 2, 1)])
            .group("empty", &[])
            .group("second", &[("y.png", 1, 2), ("z.png", 1, 1), ("w.png", 3, 3)]);
        let mut assembler = DeckAssembler::new(DeckConfig::default(), source);
        let pres = assembler.assemble().unwrap();

        assert_eq!(pres.slide_count(), 3);
        assert_eq!(assembler.skipped_groups, vec!["empty".to_string()]);
        assert_eq!(assembler.images, 4);

        let second = pres.slide(2).unwrap();
        assert_eq!(second.title(), Some("second"));
        let last = second.shapes().last().unwrap();
        assert_eq!(last.text(), Some("2"));
    }

    #[test]
    fn test_too_many_images_aborts() {
        let images: Vec<(String, u32, u32)> =
            (0..9).map(|i| (format!("img{i}.png"), 1, 1)).collect();
        let images: Vec<(&str, u32, u32)> =
            images.iter().map(|(n, w, h)| (n.as_str(), *w, *h)).collect();
        let source = MemorySource::new().group("crowded", &images);

        let mut assembler = DeckAssembler::new(DeckConfig::default(), source);
        let err = assembler.assemble().unwrap_err();
        assert!(matches!(
            err,
            Error::Layout(LayoutError::TooManyImages { count: 9, max: 8 })
        ));
    }

    #[test]
    fn test_run_requires_input_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckConfig {
            input_dir: dir.path().join("missing"),
            output_dir: dir.path().join("out"),
            ..Default::default()
        };
        let err = DeckAssembler::from_config(config).run().unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
        assert!(!dir.path().join("out").exists());
    }
}
