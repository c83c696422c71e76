use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use minicms::config::Config;
use minicms::content::{Post, PostId, PostStatus};
use minicms::post_list::{permalink, PostList};
use minicms::post_store::PostStore;
use minicms::render::display_tree::render_display_tree;
use minicms::render::html_writer::to_html;
use minicms::render::live_preview::LivePreview;
use minicms::text_utils::{now_timestamp, slug_from_title};
use minicms::util::os_helper::local_principal;
use minicms::view::article_renderer::{ArticleRenderer, DEFAULT_ARTICLE_TPL};
use minicms::view::list_renderer::{ListRenderer, DEFAULT_LIST_TPL};

const ARTICLE_TPL_NAME: &str = "article.tpl";

#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Post JSON file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Id of a stored post
    #[arg(short, long)]
    id: Option<String>,

    /// Slug of a stored post
    #[arg(short, long)]
    slug: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Wraps the article in the page template
    #[arg(short, long)]
    page: bool,

    /// Page template. Defaults to article.tpl in the template dir
    #[arg(short, long)]
    template: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Matches title or tags, case-insensitive
    #[arg(short, long, default_value = "")]
    query: String,

    /// Only posts with this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Leaves drafts out
    #[arg(short, long)]
    published: bool,
}

#[derive(clap::Args, Debug)]
pub struct TagsArgs {
    /// Only tags of published posts
    #[arg(short, long)]
    published: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Author uid. If empty, the OS user name is used
    #[arg(short, long)]
    author: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SaveArgs {
    /// Post JSON file
    file: PathBuf,

    /// Stored post to overwrite. A new id is assigned when missing
    #[arg(short, long)]
    id: Option<String>,

    /// Author uid. If empty, the OS user name is used
    #[arg(short, long)]
    author: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Id of the stored post
    id: String,
}

fn read_post_file(path: &PathBuf) -> Result<Post> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;
    let post = serde_json::from_str::<Post>(&content)
        .with_context(|| format!("Error parsing post {}", path.display()))?;
    Ok(post)
}

fn load_post(config: &Config, source: &SourceArgs) -> Result<Post> {
    if let Some(ref file) = source.file {
        return read_post_file(file);
    }

    let store = PostStore::new(&config.paths.posts_dir);
    if let Some(ref id) = source.id {
        return Ok(store.load(&PostId(id.clone()))?);
    }
    if let Some(ref slug) = source.slug {
        let list = PostList::new(store.load_all()?);
        return match list.find_by_slug(slug) {
            Some(entry) => Ok(entry.post.clone()),
            None => bail!("No post with slug {}", slug),
        };
    }

    bail!("One of --file, --id or --slug is required")
}

fn article_template(config: &Config, template: Option<PathBuf>) -> Result<String> {
    let path = template.or_else(|| {
        config.paths.template_dir.as_ref()
            .map(|dir| dir.join(ARTICLE_TPL_NAME))
            .filter(|path| path.exists())
    });

    match path {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Error reading template {}", path.display())),
        None => Ok(DEFAULT_ARTICLE_TPL.to_string()),
    }
}

pub fn render_cmd(config: &Config, args: RenderArgs) -> Result<()> {
    let post = load_post(config, &args.source)?;

    if !args.page {
        println!("{}", to_html(&render_display_tree(&post)));
        return Ok(());
    }

    let tpl_src = article_template(config, args.template)?;
    let renderer = ArticleRenderer::new(&tpl_src)?;
    let link = if post.slug.is_empty() {
        None
    } else {
        Some(permalink(&config.site.base_url, &post.slug))
    };
    print!("{}", renderer.render(&post, link.as_deref()));

    Ok(())
}

pub fn sandbox_cmd(config: &Config, args: SourceArgs) -> Result<()> {
    let post = load_post(config, &args)?;
    let preview = LivePreview::new(&config.live_preview);
    println!("{}", preview.document_for(&post.blocks));
    Ok(())
}

pub fn list_cmd(config: &Config, args: ListArgs) -> Result<()> {
    let store = PostStore::new(&config.paths.posts_dir);
    let mut list = PostList::new(store.load_all()?);
    if args.published {
        list = list.published_only();
    }

    let entries = list.filter(&args.query, args.tag.as_deref());
    let renderer = ListRenderer::new(DEFAULT_LIST_TPL, &config.site.base_url)?;
    print!("{}", renderer.render(&entries, &list.all_tags()));
    Ok(())
}

pub fn tags_cmd(config: &Config, args: TagsArgs) -> Result<()> {
    let store = PostStore::new(&config.paths.posts_dir);
    let mut list = PostList::new(store.load_all()?);
    if args.published {
        list = list.published_only();
    }

    for tag in list.all_tags() {
        println!("{}", tag);
    }
    Ok(())
}

pub fn new_cmd(config: &Config, args: NewArgs) -> Result<()> {
    let author = args.author.unwrap_or_else(local_principal);
    let post = Post {
        slug: slug_from_title(&args.title),
        title: args.title,
        status: PostStatus::Draft,
        ..Default::default()
    };

    let store = PostStore::new(&config.paths.posts_dir);
    let PostId(id) = store.save(None, post, Some(&author), &now_timestamp())?;
    println!("{}", id);
    Ok(())
}

pub fn save_cmd(config: &Config, args: SaveArgs) -> Result<()> {
    let post = read_post_file(&args.file)?;
    let author = args.author.unwrap_or_else(local_principal);
    let id = args.id.map(PostId);

    let store = PostStore::new(&config.paths.posts_dir);
    let PostId(id) = store.save(id.as_ref(), post, Some(&author), &now_timestamp())?;
    println!("{}", id);
    Ok(())
}

pub fn delete_cmd(config: &Config, args: DeleteArgs) -> Result<()> {
    let store = PostStore::new(&config.paths.posts_dir);
    store.delete(&PostId(args.id))?;
    Ok(())
}
